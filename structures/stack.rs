//! 定长数组栈
//!
//! 状态：
//!   buf : 长度固定为 capacity 的数组
//!   top : 最后一个入栈元素的下标，`None` 表示空栈
//!
//! 不变量：0 <= top + 1 <= capacity，且 top == None 当且仅当栈中没有元素。

use super::StructureError;

#[derive(Debug, Clone)]
pub struct Stack<T> {
    buf: Vec<T>,
    top: Option<usize>,
}

/// 整数栈
pub type IntStack = Stack<i32>;

/// 字符栈
pub type CharStack = Stack<char>;

impl<T: Copy + Default> Stack<T> {
    /// 创建容量为 `capacity` 的空栈
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![T::default(); capacity],
            top: None,
        }
    }

    /// 入栈，满栈时返回 `Overflow` 且不修改状态
    pub fn push(&mut self, value: T) -> Result<(), StructureError> {
        let next = self.len();
        if next >= self.capacity() {
            return Err(StructureError::Overflow {
                capacity: self.capacity(),
            });
        }
        self.buf[next] = value;
        self.top = Some(next);
        Ok(())
    }

    /// 出栈，空栈时返回 `Underflow`
    pub fn pop(&mut self) -> Result<T, StructureError> {
        let top = self.top.ok_or(StructureError::Underflow)?;
        let value = self.buf[top];
        self.top = top.checked_sub(1);
        Ok(value)
    }

    /// 查看栈顶元素，不修改状态
    pub fn peek(&self) -> Option<T> {
        self.top.map(|top| self.buf[top])
    }

    /// 从栈底到栈顶的元素
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.top.map_or(0, |top| top + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
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
    fn test_push_pop_lifo() {
        let mut stack = IntStack::new(DEFAULT_CAPACITY);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        stack.push(9).unwrap();
        assert_eq!(stack.pop(), Ok(9));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overflow_keeps_capacity_values() {
        let mut stack = IntStack::new(DEFAULT_CAPACITY);
        let mut overflows = 0;
        for i in 0..=DEFAULT_CAPACITY as i32 {
            if stack.push(i).is_err() {
                overflows += 1;
            }
        }

        assert_eq!(overflows, 1);
        assert_eq!(stack.len(), DEFAULT_CAPACITY);
        assert!(stack.is_full());
        assert_eq!(stack.peek(), Some(14));
        assert_eq!(
            stack.push(99),
            Err(StructureError::Overflow { capacity: 15 })
        );
    }

    #[test]
    fn test_underflow_leaves_state_unchanged() {
        let mut stack = CharStack::new(3);
        assert_eq!(stack.pop(), Err(StructureError::Underflow));
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);

        stack.push('x').unwrap();
        assert_eq!(stack.pop(), Ok('x'));
        assert_eq!(stack.pop(), Err(StructureError::Underflow));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_and_slice() {
        let mut stack = CharStack::new(DEFAULT_CAPACITY);
        for c in "abc".chars() {
            stack.push(c).unwrap();
        }
        assert_eq!(stack.peek(), Some('c'));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = IntStack::new(0);
        assert!(stack.is_full());
        assert!(stack.push(1).is_err());
        assert!(stack.pop().is_err());
    }
}
