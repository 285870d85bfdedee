//! Draw list for a single frame
//!
//! Turns a [`Snapshot`] into backend-neutral drawing commands. The browser
//! client paints these with the canvas 2D API; tests inspect them directly.

use crate::{Params, Snapshot};

/// Colors for each element, as CSS color strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub player: &'static str,
    pub opponent: &'static str,
    pub ball: &'static str,
    pub net: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#111",
            player: "#50fa7b",
            opponent: "#ff5555",
            ball: "#f1fa8c",
            net: "#444",
        }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: &'static str,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: &'static str,
    },
}

/// Build the frame: background, net, player, opponent, ball
pub fn draw_list(snapshot: &Snapshot, palette: &Palette) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();

    cmds.push(DrawCmd::Rect {
        x: 0.0,
        y: 0.0,
        w: snapshot.field_width,
        h: snapshot.field_height,
        color: palette.background,
    });

    let net_x = snapshot.field_width / 2.0;
    let mut y = 0.0;
    while y < snapshot.field_height {
        cmds.push(DrawCmd::Line {
            x0: net_x,
            y0: y,
            x1: net_x,
            y1: y + Params::NET_SEGMENT,
            color: palette.net,
        });
        y += Params::NET_SEGMENT + Params::NET_GAP;
    }

    for (paddle, color) in [
        (&snapshot.player, palette.player),
        (&snapshot.opponent, palette.opponent),
    ] {
        cmds.push(DrawCmd::Rect {
            x: paddle.x,
            y: paddle.y,
            w: paddle.width,
            h: paddle.height,
            color,
        });
    }

    cmds.push(DrawCmd::Circle {
        x: snapshot.ball.pos.x,
        y: snapshot.ball.pos.y,
        r: snapshot.ball.radius,
        color: palette.ball,
    });

    cmds
}
