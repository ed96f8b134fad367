use park_event_bus::{EventBus, SubscriptionHandle};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
struct Ping;

#[derive(Clone, Debug)]
enum Op {
    Subscribe,
    Release(usize),
    Publish,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Subscribe),
        2 => (0..32usize).prop_map(Op::Release),
        2 => Just(Op::Publish),
    ]
}

proptest! {
    #[test]
    fn publish_order_matches_live_subscription_order(ops in proptest::collection::vec(op(), 0..64)) {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut handles: Vec<(usize, SubscriptionHandle)> = Vec::new();
        let mut next_label = 0usize;

        for op in ops {
            match op {
                Op::Subscribe => {
                    let label = next_label;
                    next_label += 1;
                    let sink = seen.clone();
                    handles.push((label, bus.subscribe(move |_: &Ping| sink.lock().push(label))));
                },
                Op::Release(index) => {
                    if !handles.is_empty() {
                        let (_, mut handle) = handles.remove(index % handles.len());
                        handle.release();
                    }
                },
                Op::Publish => {
                    let expected: Vec<usize> = handles.iter().map(|(label, _)| *label).collect();
                    let delivered = bus.publish(Ping);
                    let observed = std::mem::take(&mut *seen.lock());

                    prop_assert_eq!(delivered, expected.len());
                    prop_assert_eq!(observed, expected);
                },
            }
        }

        prop_assert_eq!(bus.listener_count::<Ping>(), handles.len());
        handles.clear();
        prop_assert!(bus.is_empty());
    }

    #[test]
    fn double_release_is_indistinguishable_from_single(count in 1..16usize, victim in 0..16usize) {
        let bus = EventBus::new();
        let mut handles: Vec<SubscriptionHandle> =
            (0..count).map(|_| bus.subscribe(|_: &Ping| {})).collect();

        let victim = victim % count;
        handles[victim].release();
        let after_first = bus.listener_count::<Ping>();
        handles[victim].release();
        drop(handles.remove(victim));

        prop_assert_eq!(after_first, count - 1);
        prop_assert_eq!(bus.listener_count::<Ping>(), count - 1);
    }
}
