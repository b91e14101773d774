use std::fmt;

// https://en.wikipedia.org/wiki/Tower_of_Hanoi
//
// Disks are numbered 1 (smallest) to n (largest). A solution for n disks
// always has exactly 2^n - 1 moves.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        })
    }
}

impl Peg {
    fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Number of moves needed for n disks: 2^n - 1.
pub fn move_count(n: u32) -> u128 {
    if n >= 128 {
        return u128::MAX;
    }
    (1u128 << n) - 1
}

/// The classic recursive solution: move the top n-1 disks out of the way,
/// move disk n, move the n-1 disks back on top of it. n == 0 emits nothing.
pub fn solve(n: u32, from: Peg, to: Peg, via: Peg, emit: &mut impl FnMut(Move)) {
    if n == 0 {
        return;
    }
    solve(n - 1, from, via, to, emit);
    emit(Move { disk: n, from, to });
    solve(n - 1, via, to, from, emit);
}

enum Task {
    Solve { n: u32, from: Peg, to: Peg, via: Peg },
    Emit(Move),
}

/// Same move order as [`solve`], but driven by an explicit work stack, so
/// the memory needed is O(n) heap instead of O(n) call stack. This is what
/// the CLI streams from; huge n can still run forever, but it cannot blow
/// the stack.
pub struct Moves {
    stack: Vec<Task>,
    remaining: u128,
}

impl Moves {
    pub fn new(n: u32, from: Peg, to: Peg, via: Peg) -> Moves {
        let mut stack = Vec::new();
        if n > 0 {
            stack.push(Task::Solve { n, from, to, via });
        }
        Moves { stack, remaining: move_count(n) }
    }
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match self.stack.pop()? {
                Task::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Task::Solve { n, from, to, via } => {
                    if n == 1 {
                        self.remaining -= 1;
                        return Some(Move { disk: 1, from, to });
                    }
                    // Popped in reverse order of the recursive calls.
                    self.stack.push(Task::Solve { n: n - 1, from: via, to, via: from });
                    self.stack.push(Task::Emit(Move { disk: n, from, to }));
                    self.stack.push(Task::Solve { n: n - 1, from, to: via, via: to });
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining <= usize::MAX as u128 {
            (self.remaining as usize, Some(self.remaining as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IllegalMove {
    /// The move takes a disk from a peg that has none.
    EmptyPeg(Move),
    /// The disk on top of the source peg is not the one the move names.
    WrongDisk(Move),
    /// The disk would come to rest on a smaller one.
    DiskTooLarge(Move),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::EmptyPeg(mv) => write!(f, "illegal ({}): peg {} is empty", mv, mv.from),
            IllegalMove::WrongDisk(mv) => {
                write!(f, "illegal ({}): disk {} is not on top of {}", mv, mv.disk, mv.from)
            }
            IllegalMove::DiskTooLarge(mv) => {
                write!(f, "illegal ({}): a smaller disk is on top of {}", mv, mv.to)
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// An explicit three-peg model. The solvers never need one (the ordering
/// rule holds by construction), but replaying a move sequence through it
/// checks legality and completion.
#[derive(Debug, Clone)]
pub struct Towers {
    pegs: [Vec<u32>; 3],
}

impl Towers {
    /// All n disks on `from`, largest at the bottom.
    pub fn new(n: u32, from: Peg) -> Towers {
        let mut pegs: [Vec<u32>; 3] = Default::default();
        pegs[from.index()].extend((1..=n).rev());
        Towers { pegs }
    }

    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let top = match self.pegs[mv.from.index()].last() {
            Some(&top) => top,
            None => return Err(IllegalMove::EmptyPeg(mv)),
        };
        if top != mv.disk {
            return Err(IllegalMove::WrongDisk(mv));
        }
        if let Some(&dst) = self.pegs[mv.to.index()].last() {
            if dst < mv.disk {
                return Err(IllegalMove::DiskTooLarge(mv));
            }
        }
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(mv.disk);
        Ok(())
    }

    /// True iff every disk sits on `target`. A peg only ever holds disks in
    /// descending size order (apply() enforces it), so no order check needed.
    pub fn solved(&self, target: Peg, n: u32) -> bool {
        self.pegs[target.index()].len() == n as usize
    }
}
