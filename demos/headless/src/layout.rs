//! Demo layout, laid out with the same commands a player's pointer would
//! produce.
//!
//! ```text
//!   x: 0 1 2 3 4 5 6 7 8
//! y=2          ┌─────── S1
//! y=3          ◆──┐
//! y=4    B─────┘  │
//! y=5             │
//! y=6             └──── S2
//! ```
//!
//! `B` base station at (1,4), `◆` switch at (5,3), stations at (8,2) and
//! (8,6).  The switch starts on the upper route.

use anyhow::{Result, bail};

use tr_core::TilePos;
use tr_sim::{Command, World};

pub const SWITCH: TilePos = TilePos { x: 5, y: 3 };

fn p(x: u32, y: u32) -> TilePos {
    TilePos::new(x, y)
}

pub fn build_layout(world: &mut World) -> Result<()> {
    let commands = [
        Command::PlaceBaseStation(p(1, 4)),
        Command::PlaceStation(p(8, 2)),
        Command::PlaceStation(p(8, 6)),
        // Main line: base → (5,4) → up to (5,2) → right into station 1.
        Command::BeginDrag(p(1, 4)),
        Command::DragTo(p(5, 4)),
        Command::DragTo(p(5, 2)),
        Command::DragTo(p(7, 2)),
        Command::EndDrag,
        // Branch: a switch mid-climb, its spare branch dragged to station 2.
        Command::PlaceSwitch(SWITCH),
        Command::BeginDrag(SWITCH),
        Command::DragTo(p(7, 6)),
        Command::EndDrag,
    ];
    for command in commands {
        let outcome = world.apply(command);
        if let Some(notice) = outcome.notice {
            println!("  notice [{}]: {notice}", notice.key());
        }
        if !outcome.accepted {
            bail!("layout command {command:?} was rejected");
        }
    }

    let issues = world.map().check_topology();
    if !issues.is_empty() {
        bail!("layout is inconsistent: {issues:?}");
    }
    Ok(())
}
