use console::style;

use croco_core::{ProgressEvent, RunReport, Variant};

pub fn render_banner() {
    let line = style("━".repeat(48)).green();
    println!("{line}");
    println!("  {}", style("croco - full-stack project generator").green().bold());
    println!("  {}", style("Astro + React frontend, Express backend, shared types").green());
    println!("{line}");
    println!();
}

/// Prints one progress event of a run.
pub fn print_progress(event: &ProgressEvent) {
    match event {
        ProgressEvent::StepStarted {
            step,
            total,
            message,
        } => println!("{} {message} ...", style(format!("[{step}/{total}]")).dim()),
        ProgressEvent::StepCompleted {
            step,
            total,
            message,
        } => println!(
            "{} {} {message}",
            style(format!("[{step}/{total}]")).dim(),
            style("✓").green()
        ),
        ProgressEvent::StepSkipped {
            step,
            total,
            message,
        } => println!(
            "{} {} {message}",
            style(format!("[{step}/{total}]")).dim(),
            style("-").yellow()
        ),
        ProgressEvent::Warning { message } => {
            eprintln!("{} {}", style("!").yellow(), style(message).yellow());
        }
    }
}

pub fn render_summary(report: &RunReport) {
    println!();
    println!("{}", style("Project created successfully!").green().bold());
    println!();
    for line in summary_lines(report) {
        println!("{line}");
    }
}

/// Structure overview and next steps, unstyled.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let frontend = match report.variant {
        Variant::Minimal => "│   ├── frontend/    (Astro + React + Tailwind)",
        Variant::Full => "│   ├── frontend/    (Astro + React + Tailwind, pages/layouts/components)",
    };
    let mut lines = vec![
        "Project structure:".to_string(),
        format!("{}/", report.project_name),
        "├── apps/".to_string(),
        frontend.to_string(),
        "│   └── backend/     (Express + TypeScript)".to_string(),
        "├── packages/".to_string(),
        "│   └── types/       (Shared types with Zod)".to_string(),
        "├── package.json".to_string(),
        "├── tsconfig.json".to_string(),
        "├── turbo.json".to_string(),
        "└── .env".to_string(),
        String::new(),
        "Next steps:".to_string(),
        format!("   cd {}", report.project_name),
    ];
    if !report.installed {
        lines.push("   npm install".to_string());
    }
    lines.push("   npm run dev".to_string());
    lines
}
