//! Pointer input handling

/// Convert a viewport pointer Y into a field-relative Y
pub fn pointer_field_y(client_y: f64, canvas_top: f64) -> f32 {
    (client_y - canvas_top) as f32
}

/// Extract the field-relative pointer Y from a mouse event over `canvas`
#[cfg(target_arch = "wasm32")]
pub fn field_y_from_event(
    event: &web_sys::MouseEvent,
    canvas: &web_sys::HtmlCanvasElement,
) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    pointer_field_y(event.client_y() as f64, rect.top())
}
