use containers::{Error, Queue, Stack};

quickcheck::quickcheck! {
    fn stack_clear_then_size_is_zero(xs: Vec<i8>, pops: u8) -> bool {
        let mut stack: Stack<_> = xs.into_iter().collect();
        for _ in 0..pops {
            let _ = stack.pop();
        }
        stack.clear();

        stack.size() == 0 && stack.pop() == Err(Error::EmptyContainer { container: "stack" })
    }
}

quickcheck::quickcheck! {
    fn queue_clear_then_size_is_zero(xs: Vec<i8>, dequeues: u8) -> bool {
        let mut queue: Queue<_> = xs.into_iter().collect();
        for _ in 0..dequeues {
            let _ = queue.dequeue();
        }
        queue.clear();

        queue.size() == 0 && queue.dequeue() == Err(Error::EmptyContainer { container: "queue" })
    }
}

quickcheck::quickcheck! {
    fn failed_operations_on_drained_stack_change_nothing(xs: Vec<i8>) -> bool {
        let mut stack: Stack<_> = xs.into_iter().collect();
        while stack.pop().is_ok() {}

        let empty = Err(Error::EmptyContainer { container: "stack" });
        let failed = stack.top().copied() == empty && stack.pop() == empty;

        failed && stack == Stack::new() && stack.size() == 0
    }
}

quickcheck::quickcheck! {
    fn failed_operations_on_drained_queue_change_nothing(xs: Vec<i8>) -> bool {
        let mut queue: Queue<_> = xs.into_iter().collect();
        while queue.dequeue().is_ok() {}

        let empty = Err(Error::EmptyContainer { container: "queue" });
        let failed = queue.front().copied() == empty
            && queue.back().copied() == empty
            && queue.dequeue() == empty;

        failed && queue == Queue::new() && queue.size() == 0
    }
}

quickcheck::quickcheck! {
    fn stack_and_queue_are_mirror_images(xs: Vec<i8>) -> bool {
        let mut stack: Stack<_> = xs.iter().copied().collect();
        let mut queue: Queue<_> = xs.iter().copied().collect();

        let mut popped = Vec::new();
        while let Ok(x) = stack.pop() {
            popped.push(x);
        }
        let mut dequeued = Vec::new();
        while let Ok(x) = queue.dequeue() {
            dequeued.push(x);
        }

        popped.reverse();
        popped == xs && dequeued == xs
    }
}
