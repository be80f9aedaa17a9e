//! Per-visit interactive state for the detail screen.
//!
//! Every demo widget's state lives in one plain struct owned by the
//! detail screen instance. It is created when an item is opened and
//! dropped when the screen closes; nothing is shared across visits.

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use widgetry_core::DemoRecipe;

/// Slider adjustment per keypress
const SLIDER_STEP: f64 = 5.0;

/// Local state for the demo widgets.
#[derive(Debug, Clone)]
pub struct DemoState {
    pub text_input: String,
    pub secure_input: String,
    pub text_area: String,
    pub slider_value: f64,
    pub stepper_value: i64,
    pub toggle_on: bool,
    pub picker_index: usize,
    pub menu_index: usize,
    pub palette_index: usize,
    pub date: NaiveDate,
    pub button_presses: u32,
}

impl DemoState {
    /// Seed state from the recipe's initial values.
    pub fn for_recipe(recipe: Option<&DemoRecipe>) -> Self {
        let mut state = Self {
            text_input: String::new(),
            secure_input: String::new(),
            text_area: String::new(),
            slider_value: 50.0,
            stepper_value: 1,
            toggle_on: true,
            picker_index: 0,
            menu_index: 0,
            palette_index: 0,
            date: Local::now().date_naive(),
            button_presses: 0,
        };

        match recipe {
            Some(DemoRecipe::TextArea { initial }) => {
                state.text_area = (*initial).to_string();
            }
            Some(DemoRecipe::Slider { initial, .. }) => {
                state.slider_value = *initial;
            }
            Some(DemoRecipe::Stepper { initial, .. }) => {
                state.stepper_value = *initial;
            }
            Some(DemoRecipe::Toggle { initial, .. }) => {
                state.toggle_on = *initial;
            }
            Some(DemoRecipe::Picker { initial, .. }) => {
                state.picker_index = *initial;
            }
            _ => {}
        }

        state
    }

    /// Route a key to the demo widget the recipe renders.
    ///
    /// Returns true when the key was consumed, so the caller knows not to
    /// treat it as screen navigation. Esc is never consumed here.
    pub fn handle_key(&mut self, recipe: &DemoRecipe, key: KeyEvent) -> bool {
        match recipe {
            DemoRecipe::TextField { .. } => edit_line(&mut self.text_input, key),
            DemoRecipe::SecureField { .. } => edit_line(&mut self.secure_input, key),

            DemoRecipe::TextArea { .. } => match key.code {
                KeyCode::Char(c) => {
                    self.text_area.push(c);
                    true
                }
                KeyCode::Enter => {
                    self.text_area.push('\n');
                    true
                }
                KeyCode::Backspace => {
                    self.text_area.pop();
                    true
                }
                _ => false,
            },

            DemoRecipe::Button { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.button_presses += 1;
                    true
                }
                _ => false,
            },

            DemoRecipe::Menu { options, .. } => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.menu_index = (self.menu_index + 1) % options.len();
                    true
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_index = self
                        .menu_index
                        .checked_sub(1)
                        .unwrap_or(options.len() - 1);
                    true
                }
                _ => false,
            },

            // The original binds the progress demo to the slider value, so
            // both recipes share it.
            DemoRecipe::Slider { min, max, .. } => self.adjust_slider(key, *min, *max),
            DemoRecipe::Progress { total, .. } => self.adjust_slider(key, 0.0, *total),

            DemoRecipe::Stepper { .. } => match key.code {
                KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => {
                    self.stepper_value += 1;
                    true
                }
                KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => {
                    self.stepper_value -= 1;
                    true
                }
                _ => false,
            },

            DemoRecipe::Toggle { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.toggle_on = !self.toggle_on;
                    true
                }
                _ => false,
            },

            DemoRecipe::Picker { options, .. } => match key.code {
                KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                    self.picker_index = (self.picker_index + 1) % options.len();
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.picker_index = self
                        .picker_index
                        .checked_sub(1)
                        .unwrap_or(options.len() - 1);
                    true
                }
                _ => false,
            },

            DemoRecipe::DatePicker => {
                let delta = match key.code {
                    KeyCode::Right | KeyCode::Char('l') => 1,
                    KeyCode::Left | KeyCode::Char('h') => -1,
                    KeyCode::Down | KeyCode::Char('j') => 7,
                    KeyCode::Up | KeyCode::Char('k') => -7,
                    _ => return false,
                };
                self.date = shift_date(self.date, delta);
                true
            }

            DemoRecipe::ColorPicker { palette } => match key.code {
                KeyCode::Right | KeyCode::Char('l') => {
                    self.palette_index = (self.palette_index + 1) % palette.len();
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.palette_index = self
                        .palette_index
                        .checked_sub(1)
                        .unwrap_or(palette.len() - 1);
                    true
                }
                _ => false,
            },

            // Static demos: nothing to interact with
            _ => false,
        }
    }

    fn adjust_slider(&mut self, key: KeyEvent, min: f64, max: f64) -> bool {
        let delta = match key.code {
            KeyCode::Right | KeyCode::Char('l') => SLIDER_STEP,
            KeyCode::Left | KeyCode::Char('h') => -SLIDER_STEP,
            _ => return false,
        };
        self.slider_value = (self.slider_value + delta).clamp(min, max);
        true
    }
}

fn edit_line(buffer: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64)).unwrap_or(date)
    } else {
        date.checked_sub_days(Days::new((-days) as u64))
            .unwrap_or(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn recipe(name: &str) -> DemoRecipe {
        DemoRecipe::for_name(name).expect("seed recipe")
    }

    #[test]
    fn state_seeds_from_recipe_initials() {
        let slider = recipe("Slider");
        assert_eq!(DemoState::for_recipe(Some(&slider)).slider_value, 50.0);

        let toggle = recipe("Toggle");
        assert!(DemoState::for_recipe(Some(&toggle)).toggle_on);

        let area = recipe("TextArea");
        assert_eq!(
            DemoState::for_recipe(Some(&area)).text_area,
            "Editable text here..."
        );

        let picker = recipe("Picker");
        assert_eq!(DemoState::for_recipe(Some(&picker)).picker_index, 0);
    }

    #[test]
    fn text_field_consumes_chars_and_backspace() {
        let r = recipe("TextField");
        let mut state = DemoState::for_recipe(Some(&r));

        assert!(state.handle_key(&r, key(KeyCode::Char('h'))));
        assert!(state.handle_key(&r, key(KeyCode::Char('i'))));
        assert_eq!(state.text_input, "hi");

        assert!(state.handle_key(&r, key(KeyCode::Backspace)));
        assert_eq!(state.text_input, "h");

        // Esc is left for the screen to handle
        assert!(!state.handle_key(&r, key(KeyCode::Esc)));
    }

    #[test]
    fn slider_steps_and_clamps() {
        let r = recipe("Slider");
        let mut state = DemoState::for_recipe(Some(&r));

        assert!(state.handle_key(&r, key(KeyCode::Right)));
        assert_eq!(state.slider_value, 55.0);

        for _ in 0..20 {
            state.handle_key(&r, key(KeyCode::Right));
        }
        assert_eq!(state.slider_value, 100.0);

        for _ in 0..40 {
            state.handle_key(&r, key(KeyCode::Left));
        }
        assert_eq!(state.slider_value, 0.0);
    }

    #[test]
    fn toggle_flips_on_space() {
        let r = recipe("Toggle");
        let mut state = DemoState::for_recipe(Some(&r));
        assert!(state.toggle_on);

        assert!(state.handle_key(&r, key(KeyCode::Char(' '))));
        assert!(!state.toggle_on);

        assert!(state.handle_key(&r, key(KeyCode::Enter)));
        assert!(state.toggle_on);
    }

    #[test]
    fn stepper_moves_both_ways() {
        let r = recipe("Stepper");
        let mut state = DemoState::for_recipe(Some(&r));
        assert_eq!(state.stepper_value, 1);

        state.handle_key(&r, key(KeyCode::Up));
        state.handle_key(&r, key(KeyCode::Up));
        assert_eq!(state.stepper_value, 3);

        state.handle_key(&r, key(KeyCode::Down));
        assert_eq!(state.stepper_value, 2);
    }

    #[test]
    fn picker_wraps_around() {
        let r = recipe("Picker");
        let mut state = DemoState::for_recipe(Some(&r));
        assert_eq!(state.picker_index, 0);

        state.handle_key(&r, key(KeyCode::Right));
        assert_eq!(state.picker_index, 1);

        state.handle_key(&r, key(KeyCode::Right));
        assert_eq!(state.picker_index, 0);

        state.handle_key(&r, key(KeyCode::Left));
        assert_eq!(state.picker_index, 1);
    }

    #[test]
    fn date_picker_moves_by_day_and_week() {
        let r = recipe("DatePicker");
        let mut state = DemoState::for_recipe(Some(&r));
        let start = state.date;

        state.handle_key(&r, key(KeyCode::Right));
        assert_eq!(state.date, shift_date(start, 1));

        state.handle_key(&r, key(KeyCode::Down));
        assert_eq!(state.date, shift_date(start, 8));

        state.handle_key(&r, key(KeyCode::Up));
        state.handle_key(&r, key(KeyCode::Left));
        assert_eq!(state.date, start);
    }

    #[test]
    fn static_demos_consume_nothing() {
        let r = recipe("Text");
        let mut state = DemoState::for_recipe(Some(&r));
        assert!(!state.handle_key(&r, key(KeyCode::Char('x'))));
        assert!(!state.handle_key(&r, key(KeyCode::Enter)));
    }
}
