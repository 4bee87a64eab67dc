#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::string::ToString;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::vec::Vec;
use core::fmt;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list of `T`s whose nodes live in an index-addressed store
/// allocated from `A`.
///
/// The first appended value is the head and stays the head; every later
/// [`append`](Self::append) links a new node at the tail. Nodes are never
/// removed, so a [`NodeRef`] obtained from a list stays valid for that list's
/// whole lifetime and dropping the list releases every node exactly once.

pub struct List<T, A: Allocator = Global> {
  // Store order equals chain order: a new node is always linked at the true
  // tail, and slot 0 (when present) is the head.
  nodes: Vec<Node<T>, A>,
}

/// A handle to a node within a particular [`List`].
///
/// A `NodeRef` is only meaningful for the list that returned it. Handing it
/// to a different list may panic or address an unrelated node.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeRef(usize);

/// A head-to-tail iterator over the values of a [`List`].

pub struct Iter<'a, T> {
  nodes: &'a [Node<T>],
  cursor: Option<usize>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[derive(Clone)]
struct Node<T> {
  value: T,
  next: Option<usize>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self { nodes: Vec::new() }
  }

  /// Creates an empty list whose node store has room for `capacity` nodes,
  /// backed by the global allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    Self { nodes: Vec::with_capacity(capacity) }
  }

  /// Creates a single-node list holding `value`, backed by the global
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn of(value: T) -> Self {
    let mut list = Self::new();
    let _ = list.append(value);
    list
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list backed by the given allocator.

  pub fn new_in(allocator: A) -> Self {
    Self { nodes: Vec::new_in(allocator) }
  }

  /// Creates an empty list whose node store has room for `capacity` nodes,
  /// backed by the given allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    Self { nodes: Vec::with_capacity_in(capacity, allocator) }
  }

  /// Creates a single-node list holding `value`, backed by the given
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn of_in(value: T, allocator: A) -> Self {
    let mut list = Self::new_in(allocator);
    let _ = list.append(value);
    list
  }

  /// A reference to the backing allocator.

  #[inline(always)]
  pub fn allocator(&self) -> &A {
    self.nodes.allocator()
  }

  /// The number of values in the list.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Whether the list holds no values.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// The first node, or `None` if the list is empty.

  #[inline(always)]
  pub fn head(&self) -> Option<NodeRef> {
    if self.nodes.is_empty() { None } else { Some(NodeRef(0)) }
  }

  /// The value held by the given node.

  #[inline(always)]
  pub fn value(&self, node: NodeRef) -> &T {
    &self.nodes[node.0].value
  }

  /// The node following the given node, or `None` if it is the tail.

  #[inline(always)]
  pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
    self.nodes[node.0].next.map(NodeRef)
  }

  /// Appends `value` at the tail, walking the chain from the head, and
  /// returns a handle to the new node.
  ///
  /// The walk is linear and no tail reference is cached, so appending n
  /// values one at a time costs O(n²) overall. Use [`extend`](Extend::extend)
  /// for bulk insertion.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append(&mut self, value: T) -> NodeRef {
    match self.head() {
      None => NodeRef(self.push_node(value)),
      Some(head) => self.append_after(head, value),
    }
  }

  /// Appends `value` at the tail, walking the chain from `node` instead of
  /// from the head, and returns a handle to the new node.
  ///
  /// Regardless of which node the walk starts at, the new node becomes the
  /// last element reachable from the head.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append_after(&mut self, node: NodeRef, value: T) -> NodeRef {
    let tail = self.tail_from(node.0);
    let id = self.push_node(value);
    self.nodes[tail].next = Some(id);
    NodeRef(id)
  }

  /// Returns an iterator over the values in head-to-tail order.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      nodes: &self.nodes,
      cursor: if self.nodes.is_empty() { None } else { Some(0) },
    }
  }

  /// Renders every value in head-to-tail order, joined by `", "`.
  ///
  /// An empty list renders as the empty string; a single-value list renders
  /// as that value alone, with no separator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn render(&self) -> String
  where
    T: fmt::Display
  {
    self.to_string()
  }

  fn tail_from(&self, start: usize) -> usize {
    let mut i = start;
    while let Some(n) = self.nodes[i].next {
      i = n;
    }
    i
  }

  fn push_node(&mut self, value: T) -> usize {
    let id = self.nodes.len();
    self.nodes.push(Node { value, next: None });
    id
  }
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
  fn clone(&self) -> Self {
    Self { nodes: self.nodes.clone() }
  }
}

impl<T: PartialEq, A: Allocator> PartialEq for List<T, A> {
  fn eq(&self, other: &Self) -> bool {
    self.iter().eq(other.iter())
  }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> { }

impl<T, A: Allocator> Extend<T> for List<T, A> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    // Walk to the tail once and keep a local cursor while linking the batch,
    // rather than paying the `append` walk per element.
    let mut tail = self.head().map(|head| self.tail_from(head.0));

    for value in iter {
      let id = self.push_node(value);
      if let Some(t) = tail {
        self.nodes[t].next = Some(id);
      }
      tail = Some(id);
    }
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut iter = self.iter();

    if let Some(value) = iter.next() {
      fmt::Display::fmt(value, f)?;

      for value in iter {
        f.write_str(", ")?;
        fmt::Display::fmt(value, f)?;
      }
    }

    Ok(())
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let i = self.cursor?;
    let node = &self.nodes[i];
    self.cursor = node.next;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.cursor {
      None => (0, Some(0)),
      Some(_) => (1, Some(self.nodes.len())),
    }
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self { nodes: self.nodes, cursor: self.cursor }
  }
}

impl<'a, T> fmt::Debug for Iter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.cursor).finish()
  }
}
