//! Iterator adaptor with arbitrary lookahead and push-back.

use std::collections::VecDeque;

pub trait Buffered: Iterator {
    fn buffered(self) -> BufferedIterator<Self>
    where
        Self: Sized,
    {
        BufferedIterator::new(self)
    }
}

impl<I> Buffered for I where I: Iterator {}

pub struct BufferedIterator<I>
where
    I: Iterator,
{
    iter: I,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for BufferedIterator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_front().or_else(|| self.iter.next())
    }
}

impl<I> BufferedIterator<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        BufferedIterator {
            iter,
            buffer: VecDeque::new(),
        }
    }

    /// Pushes `value` back, so it is the next item returned.
    pub fn unget(&mut self, value: I::Item) {
        self.buffer.push_front(value);
    }

    /// Peeks at the front of the iterator.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peeki(0)
    }

    /// Peeks `i` items ahead of the front, without consuming anything.
    pub fn peeki(&mut self, i: usize) -> Option<&I::Item> {
        while self.buffer.len() <= i {
            match self.iter.next() {
                Some(item) => self.buffer.push_back(item),
                None => break,
            }
        }

        self.buffer.get(i)
    }

    /// Consumes the front item only if it satisfies `predicate`.
    pub fn next_if<P>(&mut self, predicate: P) -> Option<I::Item>
    where
        P: FnOnce(&I::Item) -> bool,
    {
        if self.peek().map_or(false, predicate) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the longest run of items satisfying `predicate`.
    pub fn next_while<P>(&mut self, predicate: P) -> Vec<I::Item>
    where
        P: Fn(&I::Item) -> bool,
    {
        let mut items = Vec::new();

        while let Some(item) = self.next_if(&predicate) {
            items.push(item);
        }

        items
    }
}
