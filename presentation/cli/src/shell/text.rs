use std::io::{self, Write};

pub const TITLE: &str = "🎯 Baseten Enterprise Sales Intelligence Tool";
pub const TAGLINE: &str = "Building on \"ML infrastructure that just works\"";

pub const CURRENT_MESSAGING: [&str; 4] = [
    "Machine learning infrastructure that just works",
    "Fastest, most reliable model delivery network",
    "Deploy and serve ML models performantly, scalably, cost-efficiently",
    "Let teams focus on what makes them unique",
];

pub const MENU_OPTIONS: [&str; 2] = [
    "1. Enterprise Competitive Analysis for AI Scaling",
    "2. Pain Points for Enterprises Scaling AI Workloads",
];

pub const CHOICE_PROMPT: &str = "Enter your choice (1-2): ";
pub const INDUSTRY_PROMPT: &str = "Enter specific industry (optional): ";
pub const INVALID_CHOICE: &str = "Please choose option 1 or 2";

pub const COMPETITIVE_HEADER: &str = "📊 ENTERPRISE COMPETITIVE ANALYSIS";
pub const COMPETITIVE_SUBTITLE: &str = "Building on current Baseten positioning";
pub const PAIN_POINTS_HEADER: &str = "💼 ENTERPRISE PAIN POINTS ANALYSIS";
pub const PAIN_POINTS_SUBTITLE: &str = "Extending 'infrastructure that just works' messaging";

pub const COMPLETE: &str = "✅ Analysis complete!";

const DEMONSTRATES: [&str; 4] = [
    "Understanding of current Baseten messaging and positioning",
    "Strategic thinking for enterprise market expansion",
    "Evolution (not replacement) of existing value propositions",
    "Baseten API capabilities for business intelligence",
];

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", TAGLINE)?;
    writeln!(out, "{}", rule(60))
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nCurrent Baseten messaging:")?;
    for line in CURRENT_MESSAGING {
        writeln!(out, "• {}", line)?;
    }

    writeln!(out, "\nSelect enterprise expansion analysis:")?;
    for option in MENU_OPTIONS {
        writeln!(out, "{}", option)?;
    }

    write!(out, "\n{}", CHOICE_PROMPT)?;
    out.flush()
}

pub fn write_section_header<W: Write>(
    out: &mut W,
    header: &str,
    subtitle: &str,
    industry: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "\n{}", header)?;
    writeln!(out, "{}", subtitle)?;
    if let Some(industry) = industry {
        writeln!(out, "Industry Focus: {}", industry)?;
    }
    writeln!(out, "{}", rule(50))
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", COMPLETE)?;
    writeln!(out, "\n💡 This demonstrates:")?;
    for line in DEMONSTRATES {
        writeln!(out, "   • {}", line)?;
    }
    Ok(())
}
