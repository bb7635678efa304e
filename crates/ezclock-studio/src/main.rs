mod cli;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use ezclock_engine::logging::{init_logging, LoggingConfig};
use ezclock_ui::prelude::*;
use log::{debug, info};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default().with_default_level(cli.log_level());
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    ensure!(
        cli.size.is_finite() && cli.size > 0.0,
        "viewport size must be a positive number, got {}",
        cli.size
    );

    let start = cli
        .time
        .unwrap_or_else(|| ClockTime::from_timelike(&chrono::Local::now()));
    let transition = if cli.animated { Transition::animated() } else { Transition::Immediate };

    let mut clock = ClockView::new(ClockStyle::default())
        .context("default clock style rejected")?
        .preferred_size(cli.size);
    let viewport = Vec2::splat(cli.size);
    clock
        .relayout(Rect::from_origin_size(Vec2::zero(), viewport))
        .with_context(|| format!("a {}px clock cannot be laid out", cli.size))?;

    let mut scene = UiScene::new();
    for frame in 0..cli.frames {
        let time = start.advanced_by(i64::from(frame));
        clock.set_time(time, transition);
        if let Some(motion) = clock.take_motion() {
            log_motion(time, &motion);
        }

        let draw_list = scene.frame(&mut clock, viewport);
        log_draw_list(draw_list);
    }

    Ok(())
}

fn log_motion(time: ClockTime, motion: &HandMotion) {
    info!(
        "{time}: hour={:.2}° minute={:.2}° second={:.2}°",
        motion.to.degrees(Hand::Hour),
        motion.to.degrees(Hand::Minute),
        motion.to.degrees(Hand::Second),
    );
    if motion.transition.is_animated() && !motion.is_still() {
        debug!(
            "animate over {:?}: sweep hour={:+.4} minute={:+.4} second={:+.4} turns",
            motion.transition.duration(),
            motion.sweep(Hand::Hour),
            motion.sweep(Hand::Minute),
            motion.sweep(Hand::Second),
        );
    }
}

fn log_draw_list(draw_list: &mut DrawList) {
    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Circle(c) => debug!(
                "  z={:<2} circle center=({:.1}, {:.1}) r={:.1}",
                item.key.z.0, c.center.x, c.center.y, c.radius
            ),
            DrawCmd::Quad(q) => debug!(
                "  z={:<2} quad {}",
                item.key.z.0,
                q.corners
                    .iter()
                    .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
        }
    }
}
