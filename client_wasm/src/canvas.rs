//! Canvas 2D painter for the game draw list

use game_core::DrawCmd;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Paint every command in order
pub fn paint(ctx: &CanvasRenderingContext2d, cmds: &[DrawCmd]) -> Result<(), JsValue> {
    for cmd in cmds {
        match *cmd {
            DrawCmd::Rect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::Circle { x, y, r, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)?;
                ctx.close_path();
                ctx.fill();
            }
            DrawCmd::Line {
                x0,
                y0,
                x1,
                y1,
                color,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(x0 as f64, y0 as f64);
                ctx.line_to(x1 as f64, y1 as f64);
                ctx.stroke();
            }
        }
    }
    Ok(())
}
