use contracts::domain::a001_vendor::VendorStats;
use leptos::prelude::*;

const ACTIVE_COLOR: &str = "#38bdf8";
const INACTIVE_COLOR: &str = "#fb7185";
const EMPTY_COLOR: &str = "#e5e7eb";

/// CSS `conic-gradient` splitting the circle into active and inactive
/// shares. An empty vendor list draws a plain grey disc.
pub fn pie_gradient(stats: &VendorStats) -> String {
    if stats.total == 0 {
        return format!("conic-gradient({EMPTY_COLOR} 0deg 360deg)");
    }
    let split = stats.active as f64 * 360.0 / stats.total as f64;
    format!("conic-gradient({ACTIVE_COLOR} 0deg {split:.1}deg, {INACTIVE_COLOR} {split:.1}deg 360deg)")
}

fn percent(part: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as usize
    }
}

/// Donut of active vs inactive vendors with a legend
#[component]
pub fn ActiveInactivePie(#[prop(into)] stats: Signal<VendorStats>) -> impl IntoView {
    let legend_row = move |label: &'static str, color: &'static str, pick: fn(&VendorStats) -> usize| {
        view! {
            <div class="pie-legend__row">
                <span class="pie-legend__swatch" style=format!("background: {color};")></span>
                <span class="pie-legend__label">{label}</span>
                <span class="pie-legend__value">
                    {move || {
                        let s = stats.get();
                        let n = pick(&s);
                        format!("{} ({}%)", n, percent(n, s.total))
                    }}
                </span>
            </div>
        }
    };

    view! {
        <div class="pie-chart">
            <div
                class="pie-chart__disc"
                role="img"
                aria-label="Active and inactive vendors"
                style=move || format!("background: {};", pie_gradient(&stats.get()))
            >
                <div class="pie-chart__hole">{move || stats.get().total}</div>
            </div>
            <div class="pie-legend">
                {legend_row("Active Vendors", ACTIVE_COLOR, |s| s.active)}
                {legend_row("Inactive Vendors", INACTIVE_COLOR, |s| s.inactive)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_split() {
        let stats = VendorStats {
            total: 4,
            active: 3,
            inactive: 1,
        };
        assert_eq!(
            pie_gradient(&stats),
            "conic-gradient(#38bdf8 0deg 270.0deg, #fb7185 270.0deg 360deg)"
        );
    }

    #[test]
    fn test_empty_and_percentages() {
        assert_eq!(
            pie_gradient(&VendorStats::default()),
            "conic-gradient(#e5e7eb 0deg 360deg)"
        );
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
    }
}
