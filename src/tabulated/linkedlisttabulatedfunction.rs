use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use log::trace;

use crate::function::function::Function;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::{
    check_index,
    check_order,
    evaluate,
    evenly_spaced,
    fmt_points,
    hash_points,
    insertion_index,
    tabulated_eq,
    validate_points,
    TabulatedFunction,
    TabulatedFunctionError,
    MIN_POINTS
};

// ─────────────────────────────────────────────────────────────────────────────
// Node arena
// ─────────────────────────────────────────────────────────────────────────────
//
// The list is circular and doubly linked. Nodes live in a Vec and refer to
// each other by slot index. Slot 0 is the sentinel: its `next` is the first
// point and its `prev` the last one, so inserting before the sentinel appends
// and every insertion goes through the same splice.

const HEAD: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Node {
    point: FunctionPoint,
    prev: usize,
    next: usize
}

/// Tabulated function over a circular doubly-linked list with a sentinel.
///
/// Positional access walks the chain from whichever end is closer; splicing
/// a node in or out is O(1) once it is located. Slots freed by deletion are
/// reused by later insertions.
#[derive(Debug)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free: Vec<usize>,
    size: usize
}

impl LinkedListTabulatedFunction {
    /// `count` evenly spaced points over `[left, right]` with zero ordinates.
    pub fn zeros(left: f64, right: f64, count: usize) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        Self::from_values(left, right, &vec![0.0; count])
    }

    /// Evenly spaced points over `[left, right]` carrying `values`.
    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        let points = evenly_spaced(left, right, values)?;
        Ok(Self::with_points(&points))
    }

    /// Copies an explicit point array, which must be ordered by strictly
    /// increasing x and hold at least two points.
    pub fn from_points(points: &[FunctionPoint]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        validate_points(points)?;
        Ok(Self::with_points(points))
    }

    fn empty(capacity: usize) -> LinkedListTabulatedFunction {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node {
            point: FunctionPoint::default(),
            prev: HEAD,
            next: HEAD
        });
        LinkedListTabulatedFunction { nodes, free: Vec::new(), size: 0 }
    }

    fn with_points(points: &[FunctionPoint]) -> LinkedListTabulatedFunction {
        let mut list = Self::empty(points.len());
        for &point in points {
            list.link_before(HEAD, point);
        }
        list
    }

    /// Splices a new node holding `point` in front of slot `target` and
    /// returns the new slot.
    fn link_before(&mut self, target: usize, point: FunctionPoint) -> usize {
        let prev = self.nodes[target].prev;
        let node = Node { point, prev, next: target };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = slot;
        self.nodes[target].prev = slot;
        self.size += 1;
        slot
    }

    fn unlink(&mut self, slot: usize) -> FunctionPoint {
        let Node { point, prev, next } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.size -= 1;
        point
    }

    /// Slot of the node at `index`, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Result<usize, TabulatedFunctionError> {
        check_index(index, self.size)?;
        let mut slot;
        if index < self.size / 2 {
            slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
        } else {
            slot = self.nodes[HEAD].prev;
            for _ in index + 1..self.size {
                slot = self.nodes[slot].prev;
            }
        }
        Ok(slot)
    }

    fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            slot: self.nodes[HEAD].next
        }
    }
}

struct Iter<'a> {
    list: &'a LinkedListTabulatedFunction,
    slot: usize
}

impl Iterator for Iter<'_> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.slot == HEAD {
            return None;
        }
        let node = &self.list.nodes[self.slot];
        self.slot = node.next;
        Some(node.point)
    }
}

impl Function for LinkedListTabulatedFunction {
    fn domain_left(&self) -> f64 {
        self.nodes[self.nodes[HEAD].next].point.x()
    }

    fn domain_right(&self) -> f64 {
        self.nodes[self.nodes[HEAD].prev].point.x()
    }

    fn value_at(&self, x: f64) -> f64 {
        if x < self.domain_left() || x > self.domain_right() {
            return f64::NAN;
        }
        evaluate(self.iter(), x)
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn point_count(&self) -> usize {
        self.size
    }

    fn point_at(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        let slot = self.slot_at(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let slot = self.slot_at(index)?;
        let Node { prev, next, .. } = self.nodes[slot];
        let prev_x = (prev != HEAD).then(|| self.nodes[prev].point.x());
        let next_x = (next != HEAD).then(|| self.nodes[next].point.x());
        check_order(index, point.x(), prev_x, next_x)?;
        self.nodes[slot].point = point;
        Ok(())
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let slot = self.slot_at(index)?;
        self.nodes[slot].point.set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        let slot = self.slot_at(index)?;
        if self.size <= MIN_POINTS {
            return Err(TabulatedFunctionError::MinimumSizeViolation);
        }
        let removed = self.unlink(slot);
        trace!("linked list backend: deleted {} at index {}", removed, index);
        Ok(())
    }

    fn insert_point(&mut self, point: FunctionPoint) -> Result<usize, TabulatedFunctionError> {
        let index = insertion_index(self.iter(), point.x())?;
        let target = if index == self.size {
            HEAD
        } else {
            self.slot_at(index)?
        };
        let slot = self.link_before(target, point);
        trace!("linked list backend: inserted {} at index {} (slot {})", point, index, slot);
        Ok(index)
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

/// Rebuilds a compact arena holding copies of the points in order.
impl Clone for LinkedListTabulatedFunction {
    fn clone(&self) -> Self {
        let mut list = Self::empty(self.size);
        for point in self.iter() {
            list.link_before(HEAD, point);
        }
        list
    }
}

impl PartialEq for LinkedListTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl PartialEq<ArrayTabulatedFunction> for LinkedListTabulatedFunction {
    fn eq(&self, other: &ArrayTabulatedFunction) -> bool {
        tabulated_eq(self, other)
    }
}

impl PartialEq<LinkedListTabulatedFunction> for ArrayTabulatedFunction {
    fn eq(&self, other: &LinkedListTabulatedFunction) -> bool {
        tabulated_eq(self, other)
    }
}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(self.iter(), self.size, state);
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}
