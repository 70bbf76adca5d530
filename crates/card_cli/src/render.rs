//! Plain-text output

use card_core::{AccelerateType, ChemistryStyle, ProfileView};

/// Card summary: header, six composites with deltas, bonuses, accelerate type
pub fn render_profile(view: &ProfileView) -> String {
    let mut lines = vec![format!(
        "{} ({}) {} #{}",
        view.name, view.main_pos, view.rating, view.player_id
    )];

    let style = view.style.as_deref().unwrap_or("-");
    lines.push(format!("Style: {}  Chemistry: {}", style, view.level));

    for (category, value) in view.ratings.iter() {
        let delta = view.diff.get(category);
        if delta != 0 {
            lines.push(format!("  {} {:>2} ({:+})", category.label(), value, delta));
        } else {
            lines.push(format!("  {} {:>2}", category.label(), value));
        }
    }

    if !view.bonuses.is_empty() {
        let bonuses: Vec<String> =
            view.bonuses.iter().map(|(key, bonus)| format!("{}+{}", key.as_str(), bonus)).collect();
        lines.push(format!("Bonuses: {}", bonuses.join(", ")));
    }

    lines.push(format!("AcceleRATE: {}", view.accelerate_type));
    lines.join("\n")
}

/// One style per line with its icon and full-chemistry bonuses
pub fn render_styles(styles: &[&ChemistryStyle]) -> String {
    styles
        .iter()
        .map(|style| {
            let bonuses: Vec<String> = style
                .bonuses
                .iter()
                .map(|(key, bonus)| format!("{}+{}", key.as_str(), bonus))
                .collect();
            format!("{:<12} {:<26} {}", style.name, style.icon_key(), bonuses.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_classification(height: u16, gap: u8, kind: AccelerateType) -> String {
    format!("{} (height {} cm, strength/agility gap {})", kind, height, gap)
}
