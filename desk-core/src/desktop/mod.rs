//! Window manager - tracks open widget windows, stacking order, geometry and
//! the minimize/maximize/close lifecycle.
//!
//! The UI renders projections of [`WindowManager::state`]; every user action
//! goes through one of the methods below.

pub mod apps;
pub mod bounds;

use shared_types::{AppDefinition, DesktopState, WindowBounds, WindowState};

use crate::error::{DeskError, DeskResult};
use bounds::{maximized_bounds, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

const BASE_Z_INDEX: u32 = 100;
/// z-indices are re-packed once they pass this value
const Z_CEILING: u32 = 10_000;
const CASCADE_ORIGIN: i32 = 100;
const CASCADE_STEP: i32 = 30;

/// Windows that were visible when "show desktop" minimized everything
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDesktopSnapshot {
    pub visible: Vec<String>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    state: DesktopState,
    show_desktop: Option<ShowDesktopSnapshot>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(apps::core_apps())
    }
}

impl WindowManager {
    pub fn new(apps: Vec<AppDefinition>) -> Self {
        Self {
            state: DesktopState {
                windows: Vec::new(),
                active_window: None,
                apps,
            },
            show_desktop: None,
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn apps(&self) -> &[AppDefinition] {
        &self.state.apps
    }

    pub fn active_window(&self) -> Option<&str> {
        self.state.active_window.as_deref()
    }

    pub fn window(&self, window_id: &str) -> Option<&WindowState> {
        self.state.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: &str) -> Option<&WindowState> {
        self.state.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn is_showing_desktop(&self) -> bool {
        self.show_desktop.is_some()
    }

    /// Non-minimized windows, back to front.
    pub fn visible_windows(&self) -> Vec<&WindowState> {
        let mut visible: Vec<_> = self.state.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Open a window for `app_id`, or bring the existing one forward for
    /// single-instance apps. Returns the window id.
    pub fn open_app(&mut self, app_id: &str) -> DeskResult<String> {
        let app = self
            .state
            .apps
            .iter()
            .find(|a| a.id == app_id)
            .cloned()
            .ok_or_else(|| DeskError::AppNotFound(app_id.to_string()))?;

        if app.single_instance {
            if let Some(existing) = self.window_for_app(app_id).map(|w| w.id.clone()) {
                self.focus(&existing)?;
                return Ok(existing);
            }
        }

        let offset = self.state.windows.len() as i32 * CASCADE_STEP;
        let window = WindowState {
            id: uuid::Uuid::new_v4().to_string(),
            app_id: app.id.clone(),
            title: app.name.clone(),
            x: CASCADE_ORIGIN + offset,
            y: CASCADE_ORIGIN + offset,
            width: app.default_width,
            height: app.default_height,
            z_index: self.next_z(),
            minimized: false,
            maximized: false,
            restore_bounds: None,
        };
        let window_id = window.id.clone();

        tracing::debug!(app_id, window_id = %window_id, "Opening window");
        self.state.windows.push(window);
        self.state.active_window = Some(window_id.clone());
        self.show_desktop = None;
        Ok(window_id)
    }

    /// Dock click: open the app, focus its window, or minimize it when it is
    /// already the active window.
    pub fn activate_app(&mut self, app_id: &str) -> DeskResult<String> {
        let existing = self
            .window_for_app(app_id)
            .map(|w| (w.id.clone(), w.minimized));
        match existing {
            Some((window_id, minimized))
                if !minimized && self.active_window() == Some(window_id.as_str()) =>
            {
                self.minimize(&window_id)?;
                Ok(window_id)
            }
            Some((window_id, _)) => {
                self.focus(&window_id)?;
                Ok(window_id)
            }
            None => self.open_app(app_id),
        }
    }

    pub fn close(&mut self, window_id: &str) -> DeskResult<()> {
        let before = self.state.windows.len();
        self.state.windows.retain(|w| w.id != window_id);
        if self.state.windows.len() == before {
            return Err(DeskError::WindowNotFound(window_id.to_string()));
        }

        if let Some(snapshot) = self.show_desktop.as_mut() {
            snapshot.visible.retain(|id| id != window_id);
            if snapshot.active.as_deref() == Some(window_id) {
                snapshot.active = None;
            }
        }

        if self.active_window() == Some(window_id) {
            self.reselect_active();
        }
        tracing::debug!(window_id, "Closed window");
        Ok(())
    }

    /// Bring a window to the front, restoring it if minimized.
    pub fn focus(&mut self, window_id: &str) -> DeskResult<()> {
        let next_z = self.next_z();
        let window = self.window_mut(window_id)?;
        window.minimized = false;
        window.z_index = next_z;
        self.state.active_window = Some(window_id.to_string());
        self.show_desktop = None;
        Ok(())
    }

    /// Hide a window. A maximized window drops its maximized flag but keeps
    /// its saved floating bounds for [`Self::restore`].
    pub fn minimize(&mut self, window_id: &str) -> DeskResult<()> {
        let window = self.window_mut(window_id)?;
        window.minimized = true;
        window.maximized = false;
        if self.active_window() == Some(window_id) {
            self.reselect_active();
        }
        Ok(())
    }

    /// Fill the canvas, remembering the floating bounds for [`Self::restore`].
    pub fn maximize(&mut self, window_id: &str, canvas: (u32, u32)) -> DeskResult<()> {
        let next_z = self.next_z();
        let window = self.window_mut(window_id)?;
        if !window.maximized && window.restore_bounds.is_none() {
            window.restore_bounds = Some(window.bounds());
        }
        window.set_bounds(maximized_bounds(canvas));
        window.maximized = true;
        window.minimized = false;
        window.z_index = next_z;
        self.state.active_window = Some(window_id.to_string());
        Ok(())
    }

    pub fn restore(&mut self, window_id: &str) -> DeskResult<()> {
        let next_z = self.next_z();
        let window = self.window_mut(window_id)?;
        if let Some(saved) = window.restore_bounds.take() {
            window.set_bounds(saved);
        }
        window.maximized = false;
        window.minimized = false;
        window.z_index = next_z;
        self.state.active_window = Some(window_id.to_string());
        Ok(())
    }

    pub fn move_to(&mut self, window_id: &str, x: i32, y: i32) -> DeskResult<()> {
        let window = self.window_mut(window_id)?;
        window.x = x;
        window.y = y;
        Ok(())
    }

    pub fn resize(&mut self, window_id: &str, width: i32, height: i32) -> DeskResult<()> {
        if width < MIN_WINDOW_WIDTH || height < MIN_WINDOW_HEIGHT {
            return Err(DeskError::InvalidSize {
                width,
                height,
                min_width: MIN_WINDOW_WIDTH,
                min_height: MIN_WINDOW_HEIGHT,
            });
        }
        let window = self.window_mut(window_id)?;
        window.width = width;
        window.height = height;
        Ok(())
    }

    /// Apply clamped bounds from a drag or resize gesture in one step.
    pub fn set_bounds(&mut self, window_id: &str, bounds: WindowBounds) -> DeskResult<()> {
        self.resize(window_id, bounds.width, bounds.height)?;
        self.move_to(window_id, bounds.x, bounds.y)?;
        // A floating window that was moved by hand has no older bounds to go back to.
        let window = self.window_mut(window_id)?;
        if !window.maximized {
            window.restore_bounds = None;
        }
        Ok(())
    }

    /// Minimize every visible window; a second call brings back exactly the
    /// windows that were hidden.
    pub fn toggle_show_desktop(&mut self) {
        if let Some(snapshot) = self.show_desktop.take() {
            for window_id in &snapshot.visible {
                if let Some(window) = self.state.windows.iter_mut().find(|w| &w.id == window_id) {
                    window.minimized = false;
                }
            }
            self.state.active_window = snapshot
                .active
                .filter(|id| self.window(id).is_some_and(|w| !w.minimized))
                .or_else(|| self.topmost_visible());
            return;
        }

        let visible: Vec<String> = self
            .visible_windows()
            .into_iter()
            .map(|w| w.id.clone())
            .collect();
        if visible.is_empty() {
            return;
        }
        for window in self.state.windows.iter_mut() {
            window.minimized = true;
        }
        self.show_desktop = Some(ShowDesktopSnapshot {
            visible,
            active: self.state.active_window.take(),
        });
    }

    /// Raise the window furthest back (keyboard window switching).
    pub fn cycle_focus(&mut self) -> Option<String> {
        let target = self.visible_windows().first()?.id.clone();
        if self.visible_windows().len() == 1 && self.active_window() == Some(target.as_str()) {
            return Some(target);
        }
        self.focus(&target).ok()?;
        Some(target)
    }

    fn window_mut(&mut self, window_id: &str) -> DeskResult<&mut WindowState> {
        self.state
            .windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or_else(|| DeskError::WindowNotFound(window_id.to_string()))
    }

    fn topmost_visible(&self) -> Option<String> {
        self.state
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone())
    }

    fn reselect_active(&mut self) {
        self.state.active_window = self.topmost_visible();
    }

    fn next_z(&mut self) -> u32 {
        let max_z = self
            .state
            .windows
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(BASE_Z_INDEX - 1);
        if max_z >= Z_CEILING {
            self.normalize_z();
            return BASE_Z_INDEX + self.state.windows.len() as u32;
        }
        max_z + 1
    }

    /// Re-pack z-indices from the base, preserving stacking order.
    pub fn normalize_z(&mut self) {
        let mut order: Vec<usize> = (0..self.state.windows.len()).collect();
        order.sort_by_key(|&i| self.state.windows[i].z_index);
        for (rank, idx) in order.into_iter().enumerate() {
            self.state.windows[idx].z_index = BASE_Z_INDEX + rank as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WindowManager {
        WindowManager::default()
    }

    #[test]
    fn open_app_cascades_and_activates() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();

        let wa = wm.window(&a).unwrap();
        let wb = wm.window(&b).unwrap();
        assert_eq!((wa.x, wa.y), (100, 100));
        assert_eq!((wb.x, wb.y), (130, 130));
        assert_eq!(wa.z_index, 100);
        assert!(wb.z_index > wa.z_index);
        assert_eq!(wm.active_window(), Some(b.as_str()));
        assert_eq!(wa.width, 420);
    }

    #[test]
    fn open_unknown_app_fails() {
        let mut wm = manager();
        assert_eq!(
            wm.open_app("spreadsheet"),
            Err(DeskError::AppNotFound("spreadsheet".to_string()))
        );
    }

    #[test]
    fn single_instance_app_refocuses_existing_window() {
        let mut wm = manager();
        let first = wm.open_app("todo").unwrap();
        wm.open_app("weather").unwrap();
        wm.minimize(&first).unwrap();

        let again = wm.open_app("todo").unwrap();
        assert_eq!(again, first);
        assert_eq!(wm.state().windows.len(), 2);
        let window = wm.window(&first).unwrap();
        assert!(!window.minimized);
        assert_eq!(wm.active_window(), Some(first.as_str()));
    }

    #[test]
    fn multi_instance_apps_open_new_windows() {
        let mut apps = apps::core_apps();
        apps[0].single_instance = false;
        let app_id = apps[0].id.clone();
        let mut wm = WindowManager::new(apps);
        let a = wm.open_app(&app_id).unwrap();
        let b = wm.open_app(&app_id).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn focus_raises_above_all_windows() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        wm.focus(&a).unwrap();
        let za = wm.window(&a).unwrap().z_index;
        let zb = wm.window(&b).unwrap().z_index;
        assert!(za > zb);
        assert_eq!(wm.active_window(), Some(a.as_str()));
    }

    #[test]
    fn close_active_reselects_topmost_visible() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        let c = wm.open_app("notepad").unwrap();
        wm.minimize(&b).unwrap();
        wm.focus(&c).unwrap();

        wm.close(&c).unwrap();
        assert_eq!(wm.active_window(), Some(a.as_str()));
        assert!(wm.window(&c).is_none());
    }

    #[test]
    fn close_last_window_clears_active() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        wm.close(&a).unwrap();
        assert_eq!(wm.active_window(), None);
        assert!(wm.state().windows.is_empty());
    }

    #[test]
    fn unknown_window_ids_are_reported() {
        let mut wm = manager();
        assert!(matches!(wm.close("nope"), Err(DeskError::WindowNotFound(_))));
        assert!(matches!(wm.focus("nope"), Err(DeskError::WindowNotFound(_))));
        assert!(matches!(
            wm.move_to("nope", 1, 1),
            Err(DeskError::WindowNotFound(_))
        ));
    }

    #[test]
    fn minimize_moves_focus_to_next_visible() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        wm.minimize(&b).unwrap();
        assert!(wm.window(&b).unwrap().minimized);
        assert_eq!(wm.active_window(), Some(a.as_str()));

        wm.minimize(&a).unwrap();
        assert_eq!(wm.active_window(), None);
        assert!(wm.visible_windows().is_empty());
    }

    #[test]
    fn maximize_then_restore_returns_to_floating_bounds() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        wm.move_to(&a, 240, 180).unwrap();
        let floating = wm.window(&a).unwrap().bounds();

        wm.maximize(&a, (1600, 900)).unwrap();
        let window = wm.window(&a).unwrap();
        assert!(window.maximized);
        assert_eq!((window.x, window.y, window.width, window.height), (0, 0, 1600, 900));

        // A second maximize must not overwrite the saved floating bounds.
        wm.maximize(&a, (1600, 900)).unwrap();
        wm.restore(&a).unwrap();
        let window = wm.window(&a).unwrap();
        assert!(!window.maximized);
        assert_eq!(window.bounds(), floating);
        assert_eq!(window.restore_bounds, None);
    }

    #[test]
    fn minimize_clears_maximized_but_restore_still_unmaximizes() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let floating = wm.window(&a).unwrap().bounds();
        wm.maximize(&a, (1600, 900)).unwrap();

        wm.minimize(&a).unwrap();
        let window = wm.window(&a).unwrap();
        assert!(window.minimized);
        assert!(!window.maximized);
        assert_eq!(window.restore_bounds, Some(floating));

        wm.restore(&a).unwrap();
        let window = wm.window(&a).unwrap();
        assert!(!window.minimized);
        assert_eq!(window.bounds(), floating);
        assert_eq!(wm.active_window(), Some(a.as_str()));
    }

    #[test]
    fn dragging_a_floating_window_forgets_stale_restore_bounds() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        wm.maximize(&a, (1600, 900)).unwrap();
        wm.minimize(&a).unwrap();
        wm.focus(&a).unwrap();

        let dragged = WindowBounds {
            x: 300,
            y: 200,
            width: 500,
            height: 400,
        };
        wm.set_bounds(&a, dragged).unwrap();
        assert_eq!(wm.window(&a).unwrap().restore_bounds, None);

        wm.maximize(&a, (1600, 900)).unwrap();
        wm.restore(&a).unwrap();
        assert_eq!(wm.window(&a).unwrap().bounds(), dragged);
    }

    #[test]
    fn resize_rejects_tiny_windows() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        assert!(matches!(
            wm.resize(&a, 120, 400),
            Err(DeskError::InvalidSize { .. })
        ));
        wm.resize(&a, 640, 480).unwrap();
        let window = wm.window(&a).unwrap();
        assert_eq!((window.width, window.height), (640, 480));
    }

    #[test]
    fn show_desktop_round_trip_restores_only_hidden_windows() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        let c = wm.open_app("notepad").unwrap();
        wm.minimize(&a).unwrap();
        wm.focus(&b).unwrap();

        wm.toggle_show_desktop();
        assert!(wm.is_showing_desktop());
        assert!(wm.visible_windows().is_empty());
        assert_eq!(wm.active_window(), None);

        wm.toggle_show_desktop();
        assert!(!wm.is_showing_desktop());
        assert!(wm.window(&a).unwrap().minimized);
        assert!(!wm.window(&b).unwrap().minimized);
        assert!(!wm.window(&c).unwrap().minimized);
        assert_eq!(wm.active_window(), Some(b.as_str()));
    }

    #[test]
    fn show_desktop_with_nothing_visible_is_a_noop() {
        let mut wm = manager();
        wm.toggle_show_desktop();
        assert!(!wm.is_showing_desktop());
    }

    #[test]
    fn focusing_during_show_desktop_drops_snapshot() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        wm.toggle_show_desktop();
        wm.focus(&a).unwrap();
        assert!(!wm.is_showing_desktop());
        assert!(wm.window(&b).unwrap().minimized);
    }

    #[test]
    fn dock_activation_toggles_active_window() {
        let mut wm = manager();
        let a = wm.activate_app("todo").unwrap();
        assert_eq!(wm.active_window(), Some(a.as_str()));

        wm.activate_app("todo").unwrap();
        assert!(wm.window(&a).unwrap().minimized);

        wm.activate_app("todo").unwrap();
        assert!(!wm.window(&a).unwrap().minimized);
        assert_eq!(wm.active_window(), Some(a.as_str()));
    }

    #[test]
    fn cycle_focus_raises_backmost_window() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        let c = wm.open_app("notepad").unwrap();

        assert_eq!(wm.cycle_focus(), Some(a.clone()));
        assert_eq!(wm.cycle_focus(), Some(b.clone()));
        assert_eq!(wm.cycle_focus(), Some(c.clone()));
        assert_eq!(wm.active_window(), Some(c.as_str()));
    }

    #[test]
    fn cycle_focus_activates_lone_window() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        wm.minimize(&b).unwrap();
        wm.minimize(&a).unwrap();
        wm.focus(&a).unwrap();
        wm.state.active_window = None;

        assert_eq!(wm.cycle_focus(), Some(a.clone()));
        assert_eq!(wm.active_window(), Some(a.as_str()));

        wm.minimize(&a).unwrap();
        assert_eq!(wm.cycle_focus(), None);
    }

    #[test]
    fn z_indices_are_repacked_past_ceiling() {
        let mut wm = manager();
        let a = wm.open_app("todo").unwrap();
        let b = wm.open_app("weather").unwrap();
        for _ in 0..(Z_CEILING as usize) {
            wm.focus(&a).unwrap();
            wm.focus(&b).unwrap();
        }
        let za = wm.window(&a).unwrap().z_index;
        let zb = wm.window(&b).unwrap().z_index;
        assert!(zb > za);
        assert!(zb <= Z_CEILING + 1);
        assert_eq!(wm.active_window(), Some(b.as_str()));
    }
}
