use crate::ui::layout::HitTarget;

/// Pointer events delivered to the canvas handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button went down and came back up over the same target.
    Click(HitTarget),
    /// The pointer moved onto a new target. `pressed` is the state of the
    /// button at that moment.
    Enter { target: HitTarget, pressed: bool },
}

/// Pressed flag plus the bookkeeping needed to synthesize click and enter
/// events from raw terminal mouse reports.
#[derive(Debug, Default)]
pub struct PointerState {
    pressed: bool,
    press_target: Option<HitTarget>,
    hover: Option<HitTarget>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Button down anywhere on screen, over `target` if any.
    pub fn press(&mut self, target: Option<HitTarget>) -> Vec<PointerEvent> {
        let events = self.hover_to(target);
        self.pressed = true;
        self.press_target = target;
        events
    }

    /// Button up anywhere on screen.
    pub fn release(&mut self, target: Option<HitTarget>) -> Vec<PointerEvent> {
        let mut events = self.hover_to(target);
        if let Some(target) = target {
            if self.pressed && self.press_target == Some(target) {
                events.push(PointerEvent::Click(target));
            }
        }
        self.pressed = false;
        self.press_target = None;
        events
    }

    /// Pointer motion, with or without the button held.
    pub fn motion(&mut self, target: Option<HitTarget>) -> Vec<PointerEvent> {
        self.hover_to(target)
    }

    fn hover_to(&mut self, target: Option<HitTarget>) -> Vec<PointerEvent> {
        if target == self.hover {
            return Vec::new();
        }
        self.hover = target;
        match target {
            Some(target) => vec![PointerEvent::Enter {
                target,
                pressed: self.pressed,
            }],
            None => Vec::new(),
        }
    }
}
