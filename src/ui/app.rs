//! Main TUI application state and logic

use super::panes::{
    QueueRenderData, QueueScrollState, StackRenderData, StackScrollState, StatusRenderData,
    StepsScrollState, TerminalRenderData, TerminalScrollState,
};
use crate::trace::{Timeline, TraceError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps while auto-playing
const PLAY_INTERVAL: Duration = Duration::from_millis(400);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Steps,
    Stack,
    Queue,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: steps -> terminal -> stack -> queue)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Queue,
            FocusedPane::Queue => FocusedPane::Steps,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Queue,
            FocusedPane::Terminal => FocusedPane::Steps,
            FocusedPane::Stack => FocusedPane::Terminal,
            FocusedPane::Queue => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded trace being explored
    pub timeline: Timeline,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub steps_scroll: StepsScrollState,
    pub stack_scroll: StackScrollState,
    pub queue_scroll: QueueScrollState,
    pub terminal_scroll: TerminalScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(timeline: Timeline) -> Self {
        let now = Instant::now();
        App {
            timeline,
            focused_pane: FocusedPane::Steps,
            steps_scroll: StepsScrollState::new(),
            stack_scroll: StackScrollState {
                offset: 0,
                prev_item_count: 0,
            },
            queue_scroll: QueueScrollState { offset: 0 },
            terminal_scroll: TerminalScrollState { offset: usize::MAX },
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.timeline.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.terminal_scroll.offset = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Steps (top) | Terminal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[0]);

        // Right column: Stack (top) | Queue (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let current = self.timeline.current();
        let view = current.map(|snapshot| &snapshot.view);

        super::panes::render_steps_pane(
            frame,
            left_rows[0],
            self.timeline.snapshots(),
            self.timeline.position(),
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        let lines = self.timeline.visible_output();
        super::panes::render_terminal_pane(
            frame,
            left_rows[1],
            TerminalRenderData { lines: &lines },
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            StackRenderData { view },
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_queue_pane(
            frame,
            right_rows[1],
            QueueRenderData { view },
            self.focused_pane == FocusedPane::Queue,
            &mut self.queue_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                section: current.map_or("", |snapshot| snapshot.section.as_str()),
                current_step: self.timeline.position(),
                total_steps: self.timeline.len(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.timeline.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.terminal_scroll.offset = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.timeline.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.timeline.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Steps => {
                    // Scrolling up makes the current step move down visually
                    if let Some(row) = self.steps_scroll.target_line_row {
                        self.steps_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Queue => {
                    self.queue_scroll.offset = self.queue_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll.offset = self.terminal_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Steps => {
                    if let Some(row) = self.steps_scroll.target_line_row {
                        self.steps_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
                FocusedPane::Queue => {
                    self.queue_scroll.offset = self.queue_scroll.offset.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll.offset = self.terminal_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.timeline.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.terminal_scroll.offset = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.timeline.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.terminal_scroll.offset = usize::MAX;
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), TraceError>, done: &str) {
        match result {
            Ok(()) => {
                self.status_message = done.to_string();
                // Auto-scroll terminal to bottom
                self.terminal_scroll.offset = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::{self, Demo, DemoSettings};
    use crate::trace::Recorder;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn comparison_app() -> App {
        let mut rec = Recorder::new(16 * 1024 * 1024);
        demos::run(Demo::Comparison, &DemoSettings::default(), &mut rec).unwrap();
        App::new(rec.into_timeline())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_keys_move_through_timeline() {
        let mut app = comparison_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.timeline.position(), 3);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.timeline.position(), 2);

        press(&mut app, KeyCode::Enter);
        assert!(app.timeline.is_at_end());
        press(&mut app, KeyCode::Right);
        assert!(app.status_message.starts_with("Cannot step"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.timeline.position(), 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = comparison_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Terminal);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Steps);
    }

    #[test]
    fn test_render_shows_all_panes() {
        let mut app = comparison_app();
        // banner, then push 'A'
        press(&mut app, KeyCode::Right);
        let text = screen(&mut app);
        assert!(text.contains("Steps"));
        assert!(text.contains("Terminal Output"));
        assert!(text.contains("Stack"));
        assert!(text.contains("Queue"));
        assert!(text.contains("← top"));
    }
}
