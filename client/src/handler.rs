use tallgrass_battle::{Effect, HudView, MOVE_SLOTS, MoveButton};
use tallgrass_protocol::Side;

/// Which battle menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Moves,
}

/// Trait for drawing the battle screen.
///
/// Implement this trait to attach a display. All methods have default
/// no-op implementations, so you only need to implement what your display
/// shows. The controller is the only caller and never calls two methods at
/// once.
///
/// # Example
///
/// ```ignore
/// struct Terminal;
///
/// impl Presenter for Terminal {
///     fn show_text(&mut self, revealed: &str) {
///         print!("\r{revealed}");
///     }
/// }
/// ```
pub trait Presenter {
    /// The battle view opens over the world.
    fn open_session(&mut self) {}

    /// The battle view closes.
    fn close_session(&mut self) {}

    /// Enable or disable every battle menu control (busy lock).
    fn set_controls_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Draw HP bars, readouts and nameplates.
    fn render(&mut self, hud: &HudView) {
        let _ = hud;
    }

    /// Switch the visible menu.
    fn show_menu(&mut self, menu: Menu) {
        let _ = menu;
    }

    /// Redraw the four fight-menu buttons.
    fn show_moves(&mut self, buttons: &[MoveButton; MOVE_SLOTS]) {
        let _ = buttons;
    }

    /// Textbox contents; called with a growing prefix while a line types out.
    fn show_text(&mut self, revealed: &str) {
        let _ = revealed;
    }

    /// Called exactly once per replayed turn event, in server order.
    fn play_effect(&mut self, effect: &Effect) {
        let _ = effect;
    }

    /// Replace a combatant's sprite. Not called when no sprite resolved.
    fn set_sprite(&mut self, side: Side, url: &str) {
        let _ = (side, url);
    }

    /// Replace the arena background.
    fn set_background(&mut self, url: &str) {
        let _ = url;
    }

    /// Hand off to the world's bag view. Returns whether one opened.
    fn open_bag(&mut self) -> bool {
        false
    }

    /// Hand off to the world's team view. Returns whether one opened.
    fn open_team(&mut self) -> bool {
        false
    }

    /// A line for the world's activity log, outside the battle view.
    fn notify(&mut self, line: &str) {
        let _ = line;
    }
}
