use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ANIMATION_MS: u32 = 1000;
const FPS: u32 = 60;

fn total_frames() -> u32 {
    (ANIMATION_MS as f64 / (1000.0 / FPS as f64)).round() as u32
}

/// Value shown at `frame` of an animation from `start` to `end`; the last
/// frame lands exactly on `end`.
pub fn counter_frame(start: i64, end: i64, frame: u32, total: u32) -> i64 {
    if total == 0 || frame >= total {
        return end;
    }
    let step = (end - start) as f64 / total as f64;
    (start as f64 + step * frame as f64).round() as i64
}

/// Counts up (or down) to `value` over one second whenever it changes.
///
/// Each change starts a new run; a run stops as soon as a newer one starts
/// or the component is unmounted.
#[component]
pub fn AnimatedCounter(#[prop(into)] value: Signal<usize>) -> impl IntoView {
    let shown = RwSignal::new(0_i64);
    let previous = StoredValue::new(0_i64);
    let generation = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let end = value.get() as i64;
        let start = previous.get_value();
        previous.set_value(end);

        generation.update_value(|g| *g += 1);
        let run = generation.get_value();

        spawn_local(async move {
            let total = total_frames();
            let frame_ms = (1000.0 / FPS as f64).round() as u32;
            for frame in 1..=total {
                TimeoutFuture::new(frame_ms).await;
                if generation.try_get_value() != Some(run) {
                    return;
                }
                shown.try_set(counter_frame(start, end, frame, total));
            }
        });
    });

    on_cleanup(move || {
        generation.try_update_value(|g| *g += 1);
    });

    view! { <div class="animated-counter">{move || shown.get()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_frames_per_second_for_one_second() {
        assert_eq!(total_frames(), 60);
    }

    #[test]
    fn test_counter_frames() {
        assert_eq!(counter_frame(0, 12, 0, 60), 0);
        assert_eq!(counter_frame(0, 12, 30, 60), 6);
        assert_eq!(counter_frame(0, 12, 59, 60), 12);
        assert_eq!(counter_frame(0, 7, 60, 60), 7);
        assert_eq!(counter_frame(10, 4, 30, 60), 7);
        assert_eq!(counter_frame(3, 9, 1, 0), 9);
    }
}
