use std::fmt;
use std::io::{self, Write};

/// A singly linked list of integers. New values go on the front, and values are removed from the
/// front, so iteration order is newest-first.
pub struct LinkedList {
    head: Option<Box<Node>>,
    size: usize,
}

struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i32, next: Option<Box<Node>>) -> Node {
        Node { value, next }
    }
}

impl LinkedList {
    pub fn new() -> LinkedList {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: i32) {
        let new_node: Box<Node> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    /// Removes the first node and returns its value, or None if the list is empty. Calling this on
    /// an empty list is not an error and leaves the list untouched.
    pub fn pop_front(&mut self) -> Option<i32> {
        let node: Box<Node> = self.head.take()?;
        self.head = node.next;
        self.size -= 1;
        Some(node.value)
    }

    pub fn peek_front(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Releases every node, head first, and returns how many were released. The list is empty (and
    /// still usable) afterwards.
    ///
    /// Nodes are detached one at a time so that a long chain never turns into a long chain of
    /// nested Box destructors.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            log::trace!("Releasing node holding {}", node.value);
            released += 1;
        }
        self.size = 0;
        if released > 0 {
            log::debug!("Released {} nodes", released);
        }
        released
    }

    /// Writes the listing ("List:" followed by each value, head to tail) and a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Prints the listing to stdout. Write errors are logged rather than returned.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = self.print_to(&mut handle) {
            log::error!("Error writing list to stdout: {}", err);
        }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        LinkedList::new()
    }
}

/// Borrowing iterator over the values of a LinkedList, head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List:")?;
        for value in self {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}
