use shared_types::WindowBounds;

pub const MIN_WINDOW_WIDTH: i32 = 200;
pub const MIN_WINDOW_HEIGHT: i32 = 160;
pub const MIN_VISIBLE_X_PX: i32 = 64;
pub const MOBILE_BREAKPOINT_PX: u32 = 1024;
/// Title bars never sit higher than this.
pub const MIN_TOP_PX: i32 = 10;

pub fn is_mobile_viewport(viewport: (u32, u32)) -> bool {
    viewport.0 <= MOBILE_BREAKPOINT_PX
}

/// Keep a window grabbable: minimum size, capped to the viewport, title bar
/// below the top edge and a strip always visible horizontally. On mobile every
/// window becomes a full-width sheet.
pub fn clamp_bounds(bounds: WindowBounds, viewport: (u32, u32), is_mobile: bool) -> WindowBounds {
    let (vw, vh) = viewport;
    if is_mobile {
        let mobile_width = ((vw as i32) - 20).max(280).min(vw as i32 - 8);
        let mobile_height = ((vh as i32) - 130).max(260).min(vh as i32 - 20);
        let min_x = 4;
        let max_x = (vw as i32 - mobile_width - 4).max(min_x);
        let min_y = 8;
        let max_y = (vh as i32 - mobile_height - 64).max(min_y);
        let x = bounds.x.max(min_x).min(max_x);
        let y = bounds.y.max(min_y).min(max_y);
        return WindowBounds {
            x,
            y,
            width: mobile_width,
            height: mobile_height,
        };
    }

    let width_cap = (vw as i32 - 40).max(MIN_WINDOW_WIDTH);
    let height_cap = (vh as i32 - 120).max(MIN_WINDOW_HEIGHT);
    let width = bounds.width.max(MIN_WINDOW_WIDTH).min(width_cap);
    let height = bounds.height.max(MIN_WINDOW_HEIGHT).min(height_cap);
    let min_x = -(width - MIN_VISIBLE_X_PX).max(0);
    let max_x = (vw as i32 - MIN_VISIBLE_X_PX).max(min_x);
    let x = bounds.x.max(min_x).min(max_x);
    let max_y = (vh as i32 - height - 60).max(MIN_TOP_PX);
    let y = bounds.y.max(MIN_TOP_PX).min(max_y);

    WindowBounds {
        x,
        y,
        width,
        height,
    }
}

/// Bounds of a maximized window: the whole canvas above the dock.
pub fn maximized_bounds(canvas: (u32, u32)) -> WindowBounds {
    WindowBounds {
        x: 0,
        y: 0,
        width: (canvas.0 as i32).max(MIN_WINDOW_WIDTH),
        height: (canvas.1 as i32).max(MIN_WINDOW_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_minimums() {
        let clamped = clamp_bounds(
            WindowBounds {
                x: -100,
                y: -100,
                width: 50,
                height: 20,
            },
            (1280, 720),
            false,
        );

        assert_eq!(clamped.x, -100);
        assert_eq!(clamped.y, 10);
        assert_eq!(clamped.width, MIN_WINDOW_WIDTH);
        assert_eq!(clamped.height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn clamp_allows_horizontal_overhang_but_keeps_strip_visible() {
        let clamped = clamp_bounds(
            WindowBounds {
                x: -999,
                y: 40,
                width: 500,
                height: 300,
            },
            (1280, 720),
            false,
        );
        assert_eq!(clamped.x, -(500 - MIN_VISIBLE_X_PX));

        let clamped_right = clamp_bounds(
            WindowBounds {
                x: 9999,
                y: 40,
                width: 500,
                height: 300,
            },
            (1280, 720),
            false,
        );
        assert_eq!(clamped_right.x, 1280 - MIN_VISIBLE_X_PX);
    }

    #[test]
    fn clamp_caps_oversized_windows_to_viewport() {
        let clamped = clamp_bounds(
            WindowBounds {
                x: 0,
                y: 0,
                width: 5000,
                height: 5000,
            },
            (1280, 720),
            false,
        );
        assert_eq!(clamped.width, 1240);
        assert_eq!(clamped.height, 600);
    }

    #[test]
    fn short_viewport_keeps_title_bar_on_screen() {
        let clamped = clamp_bounds(
            WindowBounds {
                x: 100,
                y: 100,
                width: 400,
                height: 300,
            },
            (1280, 200),
            false,
        );
        assert_eq!(clamped.height, MIN_WINDOW_HEIGHT);
        assert_eq!(clamped.y, MIN_TOP_PX);

        let dragged_up = clamp_bounds(
            WindowBounds {
                x: 100,
                y: -500,
                width: 400,
                height: 300,
            },
            (1280, 200),
            false,
        );
        assert_eq!(dragged_up.y, MIN_TOP_PX);
    }

    #[test]
    fn mobile_windows_become_full_width_sheets() {
        let clamped = clamp_bounds(
            WindowBounds {
                x: 300,
                y: 300,
                width: 420,
                height: 520,
            },
            (390, 844),
            true,
        );
        assert_eq!(clamped.width, 370);
        assert_eq!(clamped.height, 714);
        assert_eq!(clamped.x, 16);
        assert_eq!(clamped.y, 66);
    }

    #[test]
    fn mobile_breakpoint_is_inclusive() {
        assert!(is_mobile_viewport((1024, 768)));
        assert!(!is_mobile_viewport((1025, 768)));
    }
}
