use std::io::{BufRead, Write};
use std::sync::Arc;

use business::domain::analysis::model::{AnalysisMode, AnalysisRequest};
use business::domain::analysis::use_cases::run::{RunAnalysisParams, RunAnalysisUseCase};

use super::error_mapper::IntoConsoleMessage;
use super::text;

/// One interactive turn: menu, optional industry, one analysis, print.
pub struct Shell {
    run_analysis: Arc<dyn RunAnalysisUseCase>,
}

impl Shell {
    pub fn new(run_analysis: Arc<dyn RunAnalysisUseCase>) -> Self {
        Self { run_analysis }
    }

    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> anyhow::Result<()> {
        text::write_menu(out)?;
        let choice = read_line(&mut input)?;

        let request = match choice.parse::<AnalysisMode>() {
            Ok(AnalysisMode::CompetitiveAnalysis) => {
                text::write_section_header(
                    out,
                    text::COMPETITIVE_HEADER,
                    text::COMPETITIVE_SUBTITLE,
                    None,
                )?;
                Some(AnalysisRequest::competitive_analysis())
            }
            Ok(AnalysisMode::PainPoints) => {
                write!(out, "{}", text::INDUSTRY_PROMPT)?;
                out.flush()?;
                let request = AnalysisRequest::pain_points(&read_line(&mut input)?);
                text::write_section_header(
                    out,
                    text::PAIN_POINTS_HEADER,
                    text::PAIN_POINTS_SUBTITLE,
                    request.industry.as_ref().map(|i| i.as_str()),
                )?;
                Some(request)
            }
            Err(_) => {
                writeln!(out, "{}", text::INVALID_CHOICE)?;
                None
            }
        };

        if let Some(request) = request {
            match self.run_analysis.execute(RunAnalysisParams { request }).await {
                Ok(completion) => writeln!(out, "{}", completion.text)?,
                Err(e) => writeln!(out, "{}", e.into_console_message())?,
            }
        }

        text::write_footer(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Reads one trimmed line; end of input reads as an empty line.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
