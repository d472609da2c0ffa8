use rranker::Report;
use rranker::report::Section;

/// Whole positions are shown as integers, averaged ones with one decimal.
pub fn format_position(position: f64) -> String {
    if position.fract() == 0.0 {
        format!("{position:.0}")
    } else {
        format!("{position:.1}")
    }
}

fn display_section(section: &Section, report: &Report) {
    let s = &section.statistics;
    println!("{}:", section.group);
    if s.size == 0 {
        println!("  No results");
        println!();
        return;
    }
    println!(
        "  Students: {}, maximum {}, minimum {}, mean {}, median {}",
        s.size,
        report.format_value(s.maximum),
        report.format_value(s.minimum),
        report.format_value(s.mean),
        report.format_value(s.median)
    );
    let width = report.scale / section.histogram.len().max(1) as f64;
    println!("  Distribution:");
    for (bin, n) in section.histogram.iter().enumerate() {
        if *n != 0 {
            println!(
                "    - [{}, {}{}: {}",
                report.format_value(bin as f64 * width),
                report.format_value((bin + 1) as f64 * width),
                if bin + 1 == section.histogram.len() { "]" } else { "[" },
                n
            );
        }
    }
    println!("  Ranking:");
    for rank in &section.ranking {
        println!(
            "    {:>6}. {} ({})",
            format_position(rank.position),
            rank.student,
            report.format_value(rank.score)
        );
    }
    println!();
}

pub fn display_report(report: &Report) {
    println!("{} (out of {})", report.title, report.scale);
    println!();
    for section in &report.sections {
        display_section(section, report);
    }
}

pub fn display_json(report: &Report) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
