//! Model-checked interleavings of small queues.
//!
//! Run with `cargo test --release --features loom --test loom_test`.
#![cfg(feature = "loom")]

use loom::sync::Arc;
use loom::thread;
use ticket_queue_rs::TicketQueue;

#[test]
fn two_producers_one_consumer() {
    loom::model(|| {
        let q = Arc::new(TicketQueue::new(2).unwrap());

        let producers: Vec<_> = [1u32, 2]
            .into_iter()
            .map(|value| {
                let q = Arc::clone(&q);
                thread::spawn(move || q.push(value))
            })
            .collect();

        let mut received = vec![q.pop(), q.pop()];
        for handle in producers {
            handle.join().unwrap();
        }

        received.sort_unstable();
        assert_eq!(received, vec![1, 2]);
        assert!(q.is_empty());
    });
}

/// The consumer reads the slot on another thread than the one that wrote it;
/// loom flags the read unless the counters order it after the write.
#[test]
fn slot_contents_visible_to_consumer() {
    loom::model(|| {
        let q = Arc::new(TicketQueue::<Vec<u8>>::new(2).unwrap());

        let consumer = {
            let q = Arc::clone(&q);
            thread::spawn(move || q.pop())
        };

        q.push(vec![1u8, 2, 3]);
        assert_eq!(consumer.join().unwrap(), vec![1, 2, 3]);
        assert!(q.is_empty());
    });
}

#[test]
fn spsc_wraps_capacity_one() {
    loom::model(|| {
        let q = Arc::new(TicketQueue::new(1).unwrap());

        let producer = {
            let q = Arc::clone(&q);
            thread::spawn(move || {
                q.push(10u32);
                q.push(20u32);
            })
        };

        assert_eq!(q.pop(), 10);
        assert_eq!(q.pop(), 20);
        producer.join().unwrap();
    });
}

#[test]
fn try_operations_never_lose_values() {
    loom::model(|| {
        let q = Arc::new(TicketQueue::new(1).unwrap());

        let producer = {
            let q = Arc::clone(&q);
            thread::spawn(move || q.try_push(String::from("x"), 1).is_ok())
        };

        let popped = q.try_pop(1);
        let pushed = producer.join().unwrap();

        match (pushed, popped) {
            (true, Some(value)) => assert_eq!(value, "x"),
            (true, None) => assert_eq!(q.try_pop(0).as_deref(), Some("x")),
            (false, popped) => assert!(popped.is_none()),
        }
    });
}
