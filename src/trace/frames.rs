//! Call-frame bookkeeping for the recursion demonstrations
//!
//! The recursion demos run on the real Rust call stack, but the viewer cannot
//! look at that. Each demo therefore mirrors its calls into a [`CallStack`]:
//! push a [`StackFrame`] on entry, record the locals worth showing, pop on
//! return. The recorder turns it into a [`FramesView`](super::view::FramesView)
//! when a snapshot is captured.

/// A local variable as it should be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVar {
    pub name: String,
    pub value: String,
}

/// Activation record for one mirrored call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function_name: String,
    pub locals: Vec<LocalVar>, // declaration order
}

impl StackFrame {
    pub fn new(function_name: impl Into<String>) -> Self {
        StackFrame {
            function_name: function_name.into(),
            locals: Vec::new(),
        }
    }

    /// Declare a local, or overwrite its displayed value if already declared
    pub fn declare_var(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.locals.iter_mut().find(|var| var.name == name) {
            Some(var) => var.value = value,
            None => self.locals.push(LocalVar { name, value }),
        }
    }

    pub fn get_var(&self, name: &str) -> Option<&LocalVar> {
        self.locals.iter().find(|var| var.name == name)
    }
}

/// Mirrored call stack
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack { frames: Vec::new() }
    }

    /// Push a new frame and return it for local declarations
    pub fn push_frame(&mut self, function_name: impl Into<String>) -> &mut StackFrame {
        self.frames.push(StackFrame::new(function_name));
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    pub fn pop_frame(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    pub fn current_frame(&self) -> Option<&StackFrame> {
        self.frames.last()
    }

    pub fn current_frame_mut(&mut self) -> Option<&mut StackFrame> {
        self.frames.last_mut()
    }

    /// All frames, outermost first
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_frames() {
        let mut calls = CallStack::new();
        calls.push_frame("main");
        calls.push_frame("function_a").declare_var("local_a", 100);
        assert_eq!(calls.depth(), 2);
        assert_eq!(
            calls.current_frame().and_then(|f| f.get_var("local_a")).map(|v| v.value.as_str()),
            Some("100")
        );

        let popped = calls.pop_frame().map(|f| f.function_name);
        assert_eq!(popped.as_deref(), Some("function_a"));
        assert_eq!(calls.depth(), 1);
    }

    #[test]
    fn test_redeclare_keeps_order() {
        let mut frame = StackFrame::new("fib");
        frame.declare_var("n", 5);
        frame.declare_var("fib1", "?");
        frame.declare_var("n", 4);

        let names: Vec<_> = frame.locals.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["n", "fib1"]);
        assert_eq!(frame.get_var("n").map(|v| v.value.as_str()), Some("4"));
    }
}
