//! 定长数组队列
//!
//! 状态：
//!   buf   : 长度固定为 capacity 的数组
//!   front : 队头下标
//!   rear  : 下一个空闲位置（最近一次入队元素的后一位）
//!
//! 两个游标同时为 `None` 表示空队列，否则占用区间为 `[front, rear)`。
//! 满的判定是 `rear == capacity - 1`，所以最后一个槽位永远不会被写入，
//! 最多只能容纳 capacity - 1 个元素。

use super::StructureError;

#[derive(Debug, Clone)]
pub struct Queue {
    buf: Vec<i32>,
    front: Option<usize>,
    rear: Option<usize>,
}

impl Queue {
    /// 创建容量为 `capacity` 的空队列
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            front: None,
            rear: None,
        }
    }

    /// 入队
    ///
    /// 空队列先把两个游标重置为 0；写入后 rear 前移一位。
    pub fn enqueue(&mut self, value: i32) -> Result<(), StructureError> {
        if self.is_full() {
            return Err(StructureError::Overflow {
                capacity: self.capacity(),
            });
        }

        let rear = match self.rear {
            Some(rear) => rear,
            None => {
                self.front = Some(0);
                0
            }
        };

        self.buf[rear] = value;
        self.rear = Some(rear + 1);
        Ok(())
    }

    /// 出队
    ///
    /// 取出队头后若 front 追上 rear，两个游标一起回到空状态。
    pub fn dequeue(&mut self) -> Result<i32, StructureError> {
        let (front, rear) = match (self.front, self.rear) {
            (Some(front), Some(rear)) => (front, rear),
            _ => return Err(StructureError::Underflow),
        };

        let value = self.buf[front];
        if front + 1 >= rear {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(front + 1);
        }
        Ok(value)
    }

    /// 队头到队尾的元素
    pub fn as_slice(&self) -> &[i32] {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => &self.buf[front..rear],
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn is_full(&self) -> bool {
        // capacity 为 0 时没有可用槽位
        match (self.capacity().checked_sub(1), self.rear) {
            (None, _) => true,
            (Some(last), Some(rear)) => rear >= last,
            (Some(_), None) => false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CAPACITY;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new(DEFAULT_CAPACITY);
        for v in [5, 6, 7, 8] {
            queue.enqueue(v).unwrap();
        }

        assert_eq!(queue.dequeue(), Ok(5));
        assert_eq!(queue.dequeue(), Ok(6));
        assert_eq!(queue.as_slice(), &[7, 8]);
        assert_eq!(queue.dequeue(), Ok(7));
        assert_eq!(queue.dequeue(), Ok(8));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_last_slot_is_never_filled() {
        // 入队 capacity 个元素时最后一个溢出，只存下 capacity - 1 个
        let mut queue = Queue::new(DEFAULT_CAPACITY);
        let mut results = Vec::new();
        for v in 0..DEFAULT_CAPACITY as i32 {
            results.push(queue.enqueue(v));
        }

        assert!(results[..DEFAULT_CAPACITY - 1].iter().all(|r| r.is_ok()));
        assert_eq!(
            results[DEFAULT_CAPACITY - 1],
            Err(StructureError::Overflow { capacity: 15 })
        );
        assert_eq!(queue.len(), DEFAULT_CAPACITY - 1);
        assert!(queue.is_full());

        // 溢出后的出队顺序仍然是入队顺序
        for expected in 0..(DEFAULT_CAPACITY - 1) as i32 {
            assert_eq!(queue.dequeue(), Ok(expected));
        }
        assert_eq!(queue.dequeue(), Err(StructureError::Underflow));
    }

    #[test]
    fn test_rear_does_not_rewind_until_drained() {
        let mut queue = Queue::new(4);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        assert!(queue.enqueue(4).is_err());

        // 出队一个后 rear 仍停在 capacity - 1，依旧判满
        assert_eq!(queue.dequeue(), Ok(1));
        assert!(queue.enqueue(4).is_err());

        // 全部出队后游标重置，可以再次入队
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.is_empty());
        queue.enqueue(10).unwrap();
        assert_eq!(queue.as_slice(), &[10]);
    }

    #[test]
    fn test_underflow_on_empty() {
        let mut queue = Queue::new(DEFAULT_CAPACITY);
        assert_eq!(queue.dequeue(), Err(StructureError::Underflow));
        assert!(queue.is_empty());
        assert!(queue.as_slice().is_empty());
    }

    #[test]
    fn test_degenerate_capacities() {
        let mut queue = Queue::new(0);
        assert!(queue.enqueue(1).is_err());

        // 容量为 1 时第一次入队就把 rear 推过最后一个槽位
        let mut queue = Queue::new(1);
        assert!(!queue.is_full());
        assert!(queue.enqueue(1).is_ok());
        assert!(queue.is_full());
        assert!(queue.enqueue(2).is_err());
        assert_eq!(queue.dequeue(), Ok(1));
        assert!(queue.is_empty());
    }
}
