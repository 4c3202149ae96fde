pub mod error;
pub mod peg;
pub mod peg_stack;

mod display;


use error::BoardError;
use peg::Peg;
use peg_stack::{Disk, PegStack};

/// The three pegs of a single game. Every game starts with the full tower on
/// `Peg::SOURCE`, and is complete once the full tower sits on `Peg::TARGET`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pegs: [PegStack; 3],
    disk_count: u8,
}

impl Board {
    /// Pushes `disk_count` down to 1 onto the source peg, so disk 1 ends on top.
    pub fn starting_position(disk_count: u8) -> Self {
        let mut pegs = Peg::ALL.map(|peg| PegStack::new(peg.name()));
        for disk in (1..=disk_count).rev() {
            pegs[Peg::SOURCE.index()].push(disk);
        }

        Self { pegs, disk_count }
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    pub fn peg(&self, peg: Peg) -> &PegStack {
        &self.pegs[peg.index()]
    }

    /// A move is legal iff `from` holds a disk and `to` is either empty or
    /// topped by a larger disk.
    pub fn is_legal_move(&self, from: Peg, to: Peg) -> bool {
        if from == to {
            return false;
        }

        let moving = match self.peg(from).peek() {
            Ok(disk) => disk,
            Err(_) => return false,
        };

        match self.peg(to).peek() {
            Ok(resting) => resting > moving,
            Err(_) => true,
        }
    }

    /// Moves the top disk of `from` onto `to`. Only checks that `from` holds a
    /// disk, the ordering rule is `is_legal_move`'s job.
    pub fn apply_move(&mut self, from: Peg, to: Peg) -> Result<Disk, BoardError> {
        let disk = self.pegs[from.index()].pop()?;
        self.pegs[to.index()].push(disk);
        Ok(disk)
    }

    pub fn is_complete(&self) -> bool {
        self.peg(Peg::TARGET).size() == usize::from(self.disk_count)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pegs: Peg::ALL.map(|peg| self.peg(peg).disks().to_vec()),
        }
    }
}

/// An owned copy of the disks on each peg, for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    pegs: [Vec<Disk>; 3],
}

impl Snapshot {
    /// The disks on `peg`, bottom to top.
    pub fn get(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Pegs in display order (Left, Middle, Right).
    pub fn iter(&self) -> impl Iterator<Item = (Peg, &[Disk])> + '_ {
        Peg::ALL.iter().map(move |&peg| (peg, self.get(peg)))
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }
}
