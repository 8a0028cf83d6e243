//! 单向链表
//!
//! 每个节点由前驱（或表头）独占持有，链上不存在环，每个节点从表头出发恰好可达一次。
//! 位置参数从 1 开始计数。

use super::StructureError;

#[derive(Debug)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<Node>>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// 头插
    pub fn insert_front(&mut self, value: i32) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    /// 尾插，空链表时新节点成为表头
    pub fn insert_end(&mut self, value: i32) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node { value, next: None }));
    }

    /// 在第 `pos` 个位置插入，合法范围是 `1..=count() + 1`
    pub fn insert_at(&mut self, value: i32, pos: usize) -> Result<(), StructureError> {
        let len = self.count();
        if pos == 0 || pos > len + 1 {
            return Err(StructureError::PositionOutOfRange { position: pos, len });
        }
        if pos == 1 {
            self.insert_front(value);
            return Ok(());
        }

        let prev = self
            .node_at_mut(pos - 1)
            .ok_or(StructureError::PositionOutOfRange { position: pos, len })?;
        let node = Box::new(Node {
            value,
            next: prev.next.take(),
        });
        prev.next = Some(node);
        Ok(())
    }

    /// 删除表头，返回被删除的值
    pub fn delete_front(&mut self) -> Result<i32, StructureError> {
        let node = self.head.take().ok_or(StructureError::Empty)?;
        self.head = node.next;
        Ok(node.value)
    }

    /// 删除表尾，返回被删除的值
    pub fn delete_end(&mut self) -> Result<i32, StructureError> {
        let len = self.count();
        match len {
            0 => Err(StructureError::Empty),
            1 => self.delete_front(),
            _ => {
                let prev = self.node_at_mut(len - 1).ok_or(StructureError::Empty)?;
                let tail = prev.next.take().ok_or(StructureError::Empty)?;
                Ok(tail.value)
            }
        }
    }

    /// 删除第 `pos` 个节点，合法范围是 `1..=count()`
    pub fn delete_at(&mut self, pos: usize) -> Result<i32, StructureError> {
        if self.head.is_none() {
            return Err(StructureError::Empty);
        }
        let len = self.count();
        if pos == 0 || pos > len {
            return Err(StructureError::PositionOutOfRange { position: pos, len });
        }
        if pos == 1 {
            return self.delete_front();
        }

        let out_of_range = StructureError::PositionOutOfRange { position: pos, len };
        let prev = self.node_at_mut(pos - 1).ok_or(out_of_range)?;
        let removed = prev.next.take().ok_or(out_of_range)?;
        prev.next = removed.next;
        Ok(removed.value)
    }

    /// 遍历整条链统计节点数
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            count += 1;
            cur = node.next.as_deref();
        }
        count
    }

    /// 选择排序：外层游标与其后每个节点比较，逆序就交换两者的值
    ///
    /// 只交换节点里存的值，不改变节点之间的链接。
    pub fn sort(&mut self) {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            let Node { value, next } = node;
            let mut ahead = next.as_deref_mut();
            while let Some(other) = ahead {
                if *value > other.value {
                    std::mem::swap(value, &mut other.value);
                }
                ahead = other.next.as_deref_mut();
            }
            cur = next.as_deref_mut();
        }
    }

    /// 原地反转：遍历一次，把每个节点的后继改指向前驱
    pub fn reverse(&mut self) -> Result<(), StructureError> {
        if self.head.is_none() {
            return Err(StructureError::Empty);
        }

        let mut prev: Option<Box<Node>> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        Ok(())
    }

    /// 释放所有节点并把表头置空
    ///
    /// 逐个断开链接，长链表不会在析构时递归过深。
    pub fn teardown(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }

    /// 从表头到表尾的所有值
    pub fn values(&self) -> Vec<i32> {
        let mut values = Vec::new();
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            values.push(node.value);
            cur = node.next.as_deref();
        }
        values
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node_at_mut(&mut self, pos: usize) -> Option<&mut Node> {
        let mut cur = self.head.as_deref_mut();
        let mut i = 1;
        while let Some(node) = cur {
            if i == pos {
                return Some(node);
            }
            i += 1;
            cur = node.next.as_deref_mut();
        }
        None
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.teardown();
    }
}
