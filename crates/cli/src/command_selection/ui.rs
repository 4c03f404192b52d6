use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, ListChoice, UiState, ViewportState};
use unitcuts_core::error::Result;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Shows `items` in a scrollable list and waits for the user to pick one.
///
/// Typing narrows the list with a fuzzy match, arrows or the mouse wheel move
/// the highlight, enter or a click picks. Escape clears the filter, or quits
/// when the filter is already empty.
pub fn prompt_for_choice(prompt: &str, items: &[String]) -> Result<ListChoice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(EnableMouseCapture)?;

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, height);
    let mut visible = filter_items(items, &ui_state.filter_text);

    let mut new_ui_state: Option<UiState> = None;
    let mut force_initial_draw = true;
    let mut down_row: Option<u16> = None;

    loop {
        let should_redraw = force_initial_draw
            || new_ui_state
                .as_ref()
                .is_some_and(|new_state| *new_state != ui_state);

        if let Some(new_state) = new_ui_state.take() {
            if new_state.filter_text != ui_state.filter_text {
                visible = filter_items(items, &new_state.filter_text);
            }
            ui_state = new_state;
        }

        if should_redraw {
            redraw_ui(prompt, &ui_state, items, &visible)?;
            force_initial_draw = false;
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let mut direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Key(key_event) => {
                let (choice, new_state, new_direction) =
                    handle_key_event(key_event, &ui_state, &visible);

                if let Some(choice) = choice {
                    return Ok(choice);
                }

                new_ui_state = new_state;
                direction = new_direction;
            }
            Event::Mouse(MouseEvent {
                kind,
                row,
                modifiers,
                ..
            }) if modifiers == KeyModifiers::NONE => match kind {
                MouseEventKind::Down(MouseButton::Left) => down_row = Some(row),
                MouseEventKind::Up(MouseButton::Left) => {
                    let clicked = down_row
                        .take()
                        .and_then(|row| clicked_item(row, &ui_state, &visible));
                    if let Some(index) = clicked {
                        return Ok(ListChoice::Index(index));
                    }
                }
                MouseEventKind::ScrollDown => direction = Some(Down),
                MouseEventKind::ScrollUp => direction = Some(Up),
                _ => {}
            },
            Event::Resize(width, height) => {
                new_ui_state = Some(handle_resize(width, height, &ui_state, visible.len()));
            }
            _ => {}
        }

        if let Some(direction) = direction {
            let base = new_ui_state.as_ref().unwrap_or(&ui_state);
            new_ui_state = Some(move_selected_index(base, visible.len(), direction));
        }
    }
}

/// Handle keyboard events in the list selector
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    visible: &[usize],
) -> (Option<ListChoice>, Option<UiState>, Option<CycleDirection>) {
    if key_event.kind != KeyEventKind::Press {
        return (None, None, None);
    }

    match key_event.code {
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Enter => {
            let choice = visible
                .get(ui_state.selected_index)
                .map(|index| ListChoice::Index(*index));
            (choice, None, None)
        }
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(ListChoice::Quit), None, None)
        }
        KeyCode::Esc if ui_state.filter_text.is_empty() => (Some(ListChoice::Quit), None, None),
        KeyCode::Esc => (None, Some(with_filter(ui_state, String::new())), None),
        KeyCode::Backspace if !ui_state.filter_text.is_empty() => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.pop();
            (None, Some(with_filter(ui_state, filter_text)), None)
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.push(c);
            (None, Some(with_filter(ui_state, filter_text)), None)
        }
        _ => (None, None, None),
    }
}

/// A changed filter starts again from the top of the list.
fn with_filter(ui_state: &UiState, filter_text: String) -> UiState {
    let mut new_state = ui_state.clone();
    new_state.filter_text = filter_text;
    new_state.selected_index = 0;
    new_state.viewport.offset = 0;
    new_state
}

/// Maps a clicked terminal row back to an item index.
fn clicked_item(row: u16, ui_state: &UiState, visible: &[usize]) -> Option<usize> {
    if row == 0 {
        // Click on header
        return None;
    }

    let list_row = (row - 1) as usize;
    if list_row >= ui_state.viewport.height as usize {
        return None;
    }

    visible.get(list_row + ui_state.viewport.offset).copied()
}

/// Handle window resize events
fn handle_resize(width: u16, height: u16, ui_state: &UiState, visible_count: usize) -> UiState {
    let new_height = height.saturating_sub(2);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match new_height.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if ui_state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = ui_state
                .selected_index
                .saturating_sub((new_height as usize).saturating_sub(1));

            if new_viewport.offset + new_height as usize > visible_count {
                new_viewport.offset = visible_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Move the selected index in the given direction, wrapping at both ends
fn move_selected_index(ui_state: &UiState, visible_count: usize, direction: CycleDirection) -> UiState {
    if visible_count == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let page = (ui_state.viewport.height as usize).max(1);

    match direction {
        Up => {
            if new_index == 0 {
                new_index = visible_count - 1;
                ui_state.viewport.offset = new_index.saturating_sub(page - 1);
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % visible_count;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + page {
                ui_state.viewport.offset = new_index + 1 - page;
            }
        }
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Indexes of the items matching `filter`, in their original order
fn filter_items(items: &[String], filter: &str) -> Vec<usize> {
    if filter.is_empty() {
        return (0..items.len()).collect();
    }

    let matcher = SkimMatcherV2::default().ignore_case();

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| matcher.fuzzy_match(item, filter).map(|_| i))
        .collect()
}

fn redraw_ui(prompt: &str, ui_state: &UiState, items: &[String], visible: &[usize]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(prompt, ui_state, visible.len())?;
    queue!(stdout, cursor::MoveToNextLine(1))?;

    if visible.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Color::Red),
            Print("No matching items!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_items_with_selection(ui_state, items, visible)?;
    }

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(format!("Filter: {}", ui_state.filter_text)),
        SetAttribute(Attribute::Reset)
    )?;

    stdout.flush()?;
    Ok(())
}

/// Print the header for the list selector
fn print_header(prompt: &str, ui_state: &UiState, visible_count: usize) -> Result<()> {
    let mut stdout = stdout();

    let left_padding = "  ";
    let position = if visible_count == 0 { 0 } else { ui_state.selected_index + 1 };
    let instructions = format!(
        "Select {prompt}   |   {}/{visible_count}   |   <esc>: Cancel",
        pad_to_width_of(position, visible_count)
    );

    let used = left_padding.len() + instructions.chars().count();
    let right_padding = " ".repeat((ui_state.viewport.width as usize).saturating_sub(used));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Print the visible slice of items with the selected one highlighted
fn print_items_with_selection(ui_state: &UiState, items: &[String], visible: &[usize]) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;

    let rows = visible
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (position, index) in rows {
        let content = format!(
            "[{}] {}",
            pad_to_width_of(position + 1, visible.len()),
            items[*index]
        );
        let padding = " ".repeat((viewport.width as usize).saturating_sub(content.chars().count()));

        if position == ui_state.selected_index {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )?;
        }

        queue!(
            stdout,
            Clear(ClearType::CurrentLine),
            Print(content),
            Print(padding),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
            cursor::MoveToNextLine(1)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        ["nginx.service", "sshd.service", "NetworkManager.service"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        assert_eq!(filter_items(&items(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_fuzzy_filter_ignores_case() {
        assert_eq!(filter_items(&items(), "NGX"), vec![0]);
        assert_eq!(filter_items(&items(), "netman"), vec![2]);
        assert!(filter_items(&items(), "zzz").is_empty());
    }

    #[test]
    fn test_typing_extends_filter_and_resets_selection() {
        let mut state = UiState::new(80, 24);
        state.selected_index = 2;

        let (choice, new_state, direction) = handle_key_event(key(KeyCode::Char('s')), &state, &[0, 1, 2]);
        assert!(choice.is_none());
        assert!(direction.is_none());
        let new_state = new_state.unwrap();
        assert_eq!(new_state.filter_text, "s");
        assert_eq!(new_state.selected_index, 0);
    }

    #[test]
    fn test_enter_picks_item_from_filtered_view() {
        let mut state = UiState::new(80, 24);
        state.selected_index = 1;

        let (choice, _, _) = handle_key_event(key(KeyCode::Enter), &state, &[0, 2]);
        assert_eq!(choice, Some(ListChoice::Index(2)));
    }

    #[test]
    fn test_enter_with_nothing_visible_does_nothing() {
        let state = UiState::new(80, 24);
        let (choice, new_state, _) = handle_key_event(key(KeyCode::Enter), &state, &[]);
        assert!(choice.is_none());
        assert!(new_state.is_none());
    }

    #[test]
    fn test_escape_clears_filter_then_quits() {
        let mut state = UiState::new(80, 24);
        state.filter_text = "ng".to_string();

        let (choice, new_state, _) = handle_key_event(key(KeyCode::Esc), &state, &[0]);
        assert!(choice.is_none());
        assert!(new_state.unwrap().filter_text.is_empty());

        let (choice, _, _) = handle_key_event(key(KeyCode::Esc), &UiState::new(80, 24), &[0]);
        assert_eq!(choice, Some(ListChoice::Quit));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let state = UiState::new(80, 24);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let (choice, _, _) = handle_key_event(event, &state, &[0]);
        assert_eq!(choice, Some(ListChoice::Quit));
    }

    #[test]
    fn test_backspace_on_empty_filter_is_ignored() {
        let state = UiState::new(80, 24);
        let (choice, new_state, _) = handle_key_event(key(KeyCode::Backspace), &state, &[0]);
        assert!(choice.is_none());
        assert!(new_state.is_none());
    }

    #[test]
    fn test_move_down_wraps_to_top() {
        let mut state = UiState::new(80, 24);
        state.selected_index = 2;

        let state = move_selected_index(&state, 3, Down);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.viewport.offset, 0);
    }

    #[test]
    fn test_move_up_wraps_to_bottom_and_scrolls() {
        // 3 visible rows, 10 items
        let state = UiState::new(80, 5);
        let state = move_selected_index(&state, 10, Up);
        assert_eq!(state.selected_index, 9);
        assert_eq!(state.viewport.offset, 7);
    }

    #[test]
    fn test_move_down_scrolls_viewport() {
        let mut state = UiState::new(80, 5);
        state.selected_index = 2;

        let state = move_selected_index(&state, 10, Down);
        assert_eq!(state.selected_index, 3);
        assert_eq!(state.viewport.offset, 1);
    }

    #[test]
    fn test_move_with_nothing_visible() {
        let state = UiState::new(80, 24);
        assert_eq!(move_selected_index(&state, 0, Down), state);
    }

    #[test]
    fn test_clicked_item_accounts_for_header_and_offset() {
        let mut state = UiState::new(80, 5);
        state.viewport.offset = 1;
        let visible = [4, 5, 6, 7];

        assert_eq!(clicked_item(0, &state, &visible), None);
        assert_eq!(clicked_item(1, &state, &visible), Some(5));
        assert_eq!(clicked_item(3, &state, &visible), Some(7));
        // Below the list area
        assert_eq!(clicked_item(4, &state, &visible), None);
    }

    #[test]
    fn test_shrinking_keeps_selection_visible() {
        let mut state = UiState::new(80, 12);
        state.selected_index = 8;

        let state = handle_resize(80, 7, &state, 20);
        assert_eq!(state.viewport.height, 5);
        assert_eq!(state.viewport.offset, 4);
    }

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(3, 120), "  3");
        assert_eq!(pad_to_width_of(42, 9), "42");
    }
}
