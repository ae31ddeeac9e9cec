use glam::Vec2;

/// Cursor position in normalized device coordinates (x right, y up, both
/// in `[-1, 1]`). `None` until the cursor first moves over the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState(pub Option<Vec2>);

impl PointerState {
    pub fn update(&mut self, client_x: f64, client_y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let x = (client_x / width as f64) * 2.0 - 1.0;
        let y = -(client_y / height as f64) * 2.0 + 1.0;
        self.0 = Some(Vec2::new(x as f32, y as f32));
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn ndc(&self) -> Option<Vec2> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_until_first_move() {
        assert_eq!(PointerState::default().ndc(), None);
    }

    #[test]
    fn test_normalizes_client_coordinates() {
        let mut pointer = PointerState::default();

        pointer.update(0.0, 0.0, 800, 600);
        assert_eq!(pointer.ndc(), Some(Vec2::new(-1.0, 1.0)));

        pointer.update(400.0, 300.0, 800, 600);
        assert_eq!(pointer.ndc(), Some(Vec2::ZERO));

        pointer.update(800.0, 600.0, 800, 600);
        assert_eq!(pointer.ndc(), Some(Vec2::new(1.0, -1.0)));

        pointer.clear();
        assert_eq!(pointer.ndc(), None);
    }

    #[test]
    fn test_zero_sized_viewport_is_ignored() {
        let mut pointer = PointerState(Some(Vec2::ONE));
        pointer.update(10.0, 10.0, 0, 600);
        assert_eq!(pointer.ndc(), Some(Vec2::ONE));
    }
}
