//! Render sinks

use crate::core::DisplayText;

/// Destination for rendered display text.
///
/// The binding calls this after every input; implementations write the
/// two lines wherever the front-end shows them.
pub trait DisplaySink {
    /// Writes the current display pair
    fn write_display(&mut self, display: &DisplayText);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn write_display(&mut self, display: &DisplayText) {
        (**self).write_display(display);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn write_display(&mut self, display: &DisplayText) {
        (**self).write_display(display);
    }
}

/// Sink that keeps every frame it was given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    frames: Vec<DisplayText>,
}

impl RecordingSink {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames, oldest first
    #[must_use]
    pub fn frames(&self) -> &[DisplayText] {
        &self.frames
    }

    /// Most recent frame
    #[must_use]
    pub fn last(&self) -> Option<&DisplayText> {
        self.frames.last()
    }

    /// Drops recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl DisplaySink for RecordingSink {
    fn write_display(&mut self, display: &DisplayText) {
        self.frames.push(display.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_frames() {
        let mut sink = RecordingSink::new();
        sink.write_display(&DisplayText::new("1", ""));
        sink.write_display(&DisplayText::new("", "1 +"));
        assert_eq!(sink.frames().len(), 2);
        assert_eq!(sink.last(), Some(&DisplayText::new("", "1 +")));
        sink.clear();
        assert!(sink.last().is_none());
    }

    fn write_one<S: DisplaySink>(mut sink: S, main: &str) {
        sink.write_display(&DisplayText::new(main, ""));
    }

    #[test]
    fn test_sink_through_mut_ref_and_box() {
        let mut sink = RecordingSink::new();
        write_one(&mut sink, "2");
        assert_eq!(sink.last(), Some(&DisplayText::new("2", "")));

        let boxed: Box<dyn DisplaySink> = Box::new(RecordingSink::new());
        write_one(boxed, "3");
    }
}
