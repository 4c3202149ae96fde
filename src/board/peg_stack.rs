use super::error::BoardError;

/// Disk sizes run from 1 (smallest) up to the disk count.
pub type Disk = u8;

/// A named stack of disks. The last element of `disks` is the top disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PegStack {
    name: &'static str,
    disks: Vec<Disk>,
}

impl PegStack {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            disks: Vec::new(),
        }
    }

    /// Does not check the ordering rule; callers validate the move first.
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub fn pop(&mut self) -> Result<Disk, BoardError> {
        self.disks
            .pop()
            .ok_or(BoardError::EmptyStackError { peg: self.name })
    }

    pub fn peek(&self) -> Result<Disk, BoardError> {
        self.disks
            .last()
            .copied()
            .ok_or(BoardError::EmptyStackError { peg: self.name })
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn size(&self) -> usize {
        self.disks.len()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }
}
