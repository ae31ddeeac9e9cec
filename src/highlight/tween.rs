//! Minimal color tweening: a [`Tween`] interpolates an RGB triple over a
//! fixed duration and a [`Tweener`] steps many of them with real elapsed
//! time, handing each intermediate value to a callback.

/// Quadratic ease-out, `1 - (1 - p)^2`.
pub fn ease_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: [f32; 3],
    pub to: [f32; 3],
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    pub fn new(from: [f32; 3], to: [f32; 3], duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn value(&self) -> [f32; 3] {
        if self.is_finished() {
            return self.to;
        }
        let k = ease_out(self.progress());
        std::array::from_fn(|i| self.from[i] + (self.to[i] - self.from[i]) * k)
    }

    pub fn advance(&mut self, dt: f32) -> [f32; 3] {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }
}

/// Running tweens, each tagged with a payload identifying what it drives.
pub struct Tweener<T> {
    running: Vec<(Tween, T)>,
}

impl<T> Default for Tweener<T> {
    fn default() -> Self {
        Self {
            running: Vec::new(),
        }
    }
}

impl<T> Tweener<T> {
    pub fn start(&mut self, tween: Tween, payload: T) {
        self.running.push((tween, payload));
    }

    /// Advances every tween by `dt` seconds and calls `on_update` with its
    /// new value. Tweens that reach their end get a final update and are
    /// returned.
    pub fn advance<F>(&mut self, dt: f32, mut on_update: F) -> Vec<T>
    where
        F: FnMut(&T, [f32; 3]),
    {
        for (tween, payload) in self.running.iter_mut() {
            let value = tween.advance(dt);
            on_update(payload, value);
        }

        let mut finished = Vec::new();
        let mut i = 0;
        while i < self.running.len() {
            if self.running[i].0.is_finished() {
                finished.push(self.running.swap_remove(i).1);
            } else {
                i += 1;
            }
        }
        finished
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn clear(&mut self) {
        self.running.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: [f32; 3] = [0.2, 0.24, 0.1];
    const TO: [f32; 3] = [0.19, 0.4, 0.0];

    #[test]
    fn test_ease_endpoints_and_monotonic() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=100 {
            let v = ease_out(step as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_tween_starts_at_from_and_lands_on_to() {
        let mut tween = Tween::new(FROM, TO, 1.0);
        assert_eq!(tween.value(), FROM);

        tween.advance(0.4);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(0.7), TO);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(10.0), TO);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(FROM, TO, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), TO);
    }

    #[test]
    fn test_tweener_reports_finished_payloads() {
        let mut tweener = Tweener::default();
        tweener.start(Tween::new(FROM, TO, 0.5), "short");
        tweener.start(Tween::new(FROM, TO, 1.0), "long");

        let mut updates = Vec::new();
        let done = tweener.advance(0.6, |name, _| updates.push(*name));
        assert_eq!(updates.len(), 2);
        assert_eq!(done, vec!["short"]);
        assert_eq!(tweener.len(), 1);

        let done = tweener.advance(0.6, |_, value| assert_eq!(value, TO));
        assert_eq!(done, vec!["long"]);
        assert!(tweener.is_empty());
    }
}
