use shared_types::AppDefinition;

fn app(id: &str, name: &str, icon: &str, default_width: i32, default_height: i32) -> AppDefinition {
    AppDefinition {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        default_width,
        default_height,
        single_instance: true,
    }
}

pub fn core_apps() -> Vec<AppDefinition> {
    vec![
        app("mixer", "Ambient Mixer", "🎧", 420, 520),
        app("pomodoro", "Pomodoro", "🍅", 360, 440),
        app("todo", "To-Do", "✅", 420, 520),
        app("kanban", "Kanban", "🗂️", 900, 560),
        app("habits", "Habits", "📆", 560, 480),
        app("notepad", "Notepad", "📝", 720, 500),
        app("weather", "Weather", "⛅", 400, 460),
        app("currency", "Currency", "💱", 400, 420),
        app("video", "Video Player", "🎬", 720, 520),
        app("password", "Password Generator", "🔑", 420, 480),
        app("json", "JSON / YAML", "🧾", 820, 560),
        app("uuid", "UUID & Slug", "🆔", 520, 480),
    ]
}

pub fn get_app_icon(app_id: &str) -> &'static str {
    match app_id {
        "mixer" => "🎧",
        "pomodoro" => "🍅",
        "todo" => "✅",
        "kanban" => "🗂️",
        "habits" => "📆",
        "notepad" => "📝",
        "weather" => "⛅",
        "currency" => "💱",
        "video" => "🎬",
        "password" => "🔑",
        "json" => "🧾",
        "uuid" => "🆔",
        _ => "📱",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let apps = core_apps();
        let mut ids: Vec<_> = apps.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), apps.len());
        assert_eq!(apps.len(), 12);
    }

    #[test]
    fn icons_match_catalog() {
        for app in core_apps() {
            assert_eq!(get_app_icon(&app.id), app.icon);
        }
        assert_eq!(get_app_icon("unknown"), "📱");
    }
}
