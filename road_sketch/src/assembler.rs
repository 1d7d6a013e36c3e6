use geom::LonLat;

use crate::{snap_vertex, Continuation, RoadCollection, Segment, SketchOptions};

/// Where the assembler is in a chain of clicks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickState {
    /// The next click begins a new chain.
    AwaitingStart,
    /// The next click finishes a segment beginning at `pending_start`.
    AwaitingEnd {
        pending_start: LonLat,
        /// True if `pending_start` is a raw click that hasn't been snapped yet
        needs_snap: bool,
    },
}

/// What a single click did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The first click of a chain, snapped to this point
    StartedChain(LonLat),
    /// A new segment was appended at this index
    AddedSegment(usize),
    /// Both ends landed on the same vertex and the options say to drop that
    RejectedZeroLength,
    /// The click had non-finite coordinates
    Ignored,
}

/// Turns a stream of clicks into a chain of connected segments: N clicks make N-1 segments. The
/// chain never ends on its own; call `finish_chain` to start a new one.
#[derive(Clone, Debug)]
pub struct Assembler {
    state: ClickState,
}

impl Assembler {
    pub fn new() -> Assembler {
        Assembler {
            state: ClickState::AwaitingStart,
        }
    }

    pub fn state(&self) -> ClickState {
        self.state
    }

    pub fn finish_chain(&mut self) {
        self.state = ClickState::AwaitingStart;
    }

    /// Snaps the click against the current roads, then either remembers it as the start of a
    /// chain, or appends one segment to `roads`.
    pub fn click(
        &mut self,
        raw: LonLat,
        roads: &mut RoadCollection,
        opts: &SketchOptions,
    ) -> ClickOutcome {
        if !raw.is_finite() {
            warn!("Ignoring click at {}", raw);
            return ClickOutcome::Ignored;
        }

        match self.state {
            ClickState::AwaitingStart => {
                let start = snap_vertex(raw, roads, opts.snap_epsilon);
                self.state = ClickState::AwaitingEnd {
                    pending_start: start,
                    needs_snap: false,
                };
                ClickOutcome::StartedChain(start)
            }
            ClickState::AwaitingEnd {
                pending_start,
                needs_snap,
            } => {
                // Both ends consult the roads as they are before this segment is added
                let start = if needs_snap {
                    snap_vertex(pending_start, roads, opts.snap_epsilon)
                } else {
                    pending_start
                };
                let end = snap_vertex(raw, roads, opts.snap_epsilon);
                let segment = Segment::new(start, end);

                if segment.is_zero_length() {
                    if opts.reject_zero_length {
                        info!("Dropping zero-length segment at {}", start);
                        return ClickOutcome::RejectedZeroLength;
                    }
                    warn!("Adding zero-length segment at {}", start);
                }
                let idx = roads.push(segment);

                self.state = match opts.continuation {
                    Continuation::Resnap => ClickState::AwaitingEnd {
                        pending_start: raw,
                        needs_snap: true,
                    },
                    Continuation::Raw => ClickState::AwaitingEnd {
                        pending_start: raw,
                        needs_snap: false,
                    },
                    Continuation::SnappedEnd => ClickState::AwaitingEnd {
                        pending_start: end,
                        needs_snap: false,
                    },
                };
                ClickOutcome::AddedSegment(idx)
            }
        }
    }
}

impl Default for Assembler {
    fn default() -> Assembler {
        Assembler::new()
    }
}
