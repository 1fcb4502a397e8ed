//! Breach memory: where the opponent has scored on us.
//!
//! The engine reports combat events many times per turn; the sub-turn
//! callback must stay cheap, so ingestion only parses and appends. The
//! record is append-only for the lifetime of a match: the most recent entry
//! is the primary signal for reactive defense and retaliatory offense, and
//! older entries are deliberately kept (never deduplicated or pruned).

use crate::location::*;
use crate::units::*;
use log::*;
use serde::Deserialize;

#[derive(Clone, Debug, Default)]
pub struct BreachMemory {
    breaches: Vec<Location>,
}

impl BreachMemory {
    pub fn new() -> Self {
        BreachMemory::default()
    }

    /// Append a breach coordinate. Ownership filtering happens at the frame
    /// boundary; everything recorded here counts as an opponent score.
    pub fn record(&mut self, loc: Location) {
        debug!("scored on at ({}, {})", loc.x(), loc.y());
        self.breaches.push(loc);
    }

    pub fn latest(&self) -> Option<Location> {
        self.breaches.last().copied()
    }

    pub fn all(&self) -> &[Location] {
        &self.breaches
    }

    pub fn len(&self) -> usize {
        self.breaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaches.is_empty()
    }

    /// Parse one sub-turn combat frame and record every opponent-owned
    /// breach in it. Returns how many were recorded. Malformed frames are
    /// logged and skipped; the event callback never fails the match.
    pub fn ingest_frame(&mut self, raw: &str) -> usize {
        let frame: ActionFrame = match serde_json::from_str(raw) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("discarding malformed combat frame: {err}");
                return 0;
            }
        };

        let mut recorded = 0;
        for breach in &frame.events.breach {
            // Frames attribute each breach to the owner of the breaching
            // unit; only the opponent's units scoring on us are relevant.
            if Owner::from_frame_index(breach.owner()) != Some(Owner::Enemy) {
                continue;
            }
            match breach.location() {
                Some(loc) => {
                    self.record(loc);
                    recorded += 1;
                }
                None => warn!(
                    "breach at out-of-board coordinate ({}, {})",
                    breach.0[0], breach.0[1]
                ),
            }
        }
        recorded
    }
}

/// Wire shape of the engine's per-tick combat frame. Only breach events are
/// consumed; the rest of the frame is ignored.
#[derive(Deserialize)]
struct ActionFrame {
    events: FrameEvents,
}

#[derive(Deserialize)]
struct FrameEvents {
    #[serde(default)]
    breach: Vec<BreachEvent>,
}

/// One breach entry: `[[x, y], damage, unit_type, unit_id, owner]`.
/// Damage, unit type and id are carried by the wire format but unused here.
#[derive(Deserialize)]
#[allow(dead_code)]
struct BreachEvent([i32; 2], f64, u32, String, u8);

impl BreachEvent {
    fn owner(&self) -> u8 {
        self.4
    }

    fn location(&self) -> Option<Location> {
        let [x, y] = self.0;
        if (0..crate::constants::BOARD_SIZE as i32).contains(&x)
            && (0..crate::constants::BOARD_SIZE as i32).contains(&y)
        {
            Some(Location::from_coords(x as u32, y as u32))
        } else {
            None
        }
    }
}
