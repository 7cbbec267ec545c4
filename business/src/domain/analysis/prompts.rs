use super::model::{AnalysisMode, AnalysisRequest};

/// Model served by the inference endpoint.
pub const MODEL: &str = "deepseek-ai/DeepSeek-V3-0324";

pub const DEFAULT_MAX_TOKENS: u32 = 800;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const SYSTEM_INSTRUCTION: &str = "You are a strategic business analyst specializing in AI infrastructure and enterprise sales. Provide detailed, actionable insights for B2B sales teams.";

const INDUSTRY_PLACEHOLDER: &str = "{industry_context}";

pub const PAIN_POINTS_TEMPLATE: &str = r#"Building on Baseten's core value proposition of "Machine learning infrastructure that just works" and "provide all the infrastructure you need to deploy and serve ML models performantly, scalably, and cost-efficiently," analyze pain points that enterprises{industry_context} face when scaling AI workloads:

CONTEXT: Baseten currently serves dynamic AI companies like Abridge, OpenEvidence, Clay, Mirage, Zed, Gamma, Sourcegraph, Writer, and Bland who "use Baseten to power applications that reach hundreds of millions of users." The messaging is "we let them take performance and reliability for granted, so they can focus on what makes them unique."

1. SCALING AND INFRASTRUCTURE PAIN POINTS:
- Complex deployment processes that slow down AI initiatives
- Performance bottlenecks with current cloud infrastructure
- Unpredictable costs as AI workloads scale beyond pilot phase
- DevOps overhead preventing teams from focusing on core product
- Reliability concerns for mission-critical AI applications

2. COMPETITIVE INFRASTRUCTURE CHALLENGES:
- Hyperscaler complexity (AWS SageMaker, Google Vertex, Azure ML) vs "infrastructure that just works"
- Token-based pricing creating budget uncertainty vs cost-efficient scaling
- Vendor lock-in concerns vs flexible, optimized serving
- Performance optimization requiring specialized expertise vs automated optimization

3. ENTERPRISE-SPECIFIC REQUIREMENTS:
- Need for enterprise-grade security and compliance
- Integration with existing enterprise systems and workflows
- Professional support and SLAs for production workloads
- Risk management and vendor evaluation processes

For each area, provide:
- How Baseten's "infrastructure that just works" messaging addresses these challenges
- Extensions of their current value proposition for enterprise buyers
- Competitive positioning leveraging their performance and cost advantages
- Business case frameworks building on their existing customer success stories

Focus on how enterprises can achieve the same "focus on what makes them unique" benefit that current customers experience."#;

pub const COMPETITIVE_ANALYSIS_TEMPLATE: &str = r#"Analyze the competitive landscape for Baseten's enterprise expansion, focusing on concrete technical advantages that translate to executive value:

BASETEN'S ACTUAL TECHNICAL DIFFERENTIATORS:
- 225% better cost-performance than hyperscalers (proven with Google Cloud A4 + NVIDIA Blackwell)
- 2x higher throughput + 10% lower latency than any other solution (Baseten Embeddings Inference)
- 6x better GPU usage + 50% latency reduction (Baseten Chains for compound AI)
- 30-60x faster cold starts: 5-10 seconds vs 5 minutes industry standard
- 60% performance improvement for custom LLMs (proven with Writer's Palmyra models)
- Sub-400ms end-to-end latency for complex multi-model workflows (AI phone calls)
- 99.99% uptime with multi-cloud deployment across regions

EXECUTIVE IMPACT ANALYSIS:

**AWS SageMaker vs Baseten:**
- Technical Gap: AWS cold starts take 5 minutes, Baseten takes 10 seconds
- CEO Impact: 30x faster deployment = faster market entry and competitive advantage
- CTO Impact: Engineering team productivity, superior user experience delivery
- CIO Impact: Reduced operational complexity vs AWS requiring specialized expertise
- CFO Impact: 225% better cost-performance = significant budget optimization

**Google Vertex AI vs Baseten:**
- Technical Gap: Google lacks multi-cloud resilience, Baseten runs across all clouds
- CEO Impact: Strategic flexibility vs vendor dependency that limits business options
- CTO Impact: Technology independence while maintaining cutting-edge performance
- CIO Impact: Business continuity protection vs catastrophic single-cloud failure risk
- CFO Impact: Better vendor negotiation position vs Google Cloud lock-in pricing

**Azure ML vs Baseten:**
- Technical Gap: Azure legacy architecture vs Baseten's next-generation optimization
- CEO Impact: Market-leading AI performance = differentiated customer experience
- CTO Impact: Competitive product capabilities vs legacy technical constraints
- CIO Impact: Modern infrastructure investment vs technical debt accumulation
- CFO Impact: Performance improvements drive measurable user engagement and revenue

STAKEHOLDER-SPECIFIC VALUE PROPOSITIONS:

**CEO Value (Strategic Business Impact):**
- Market advantage: Sub-400ms AI responses = industry-leading user experience
- Competitive differentiation: 60% better AI performance vs competitors using standard solutions
- Strategic flexibility: Multi-cloud deployment = avoid vendor dependency risks
- Growth enablement: Proven scale (hundreds of millions of users) = confidence in expansion plans
- Innovation speed: 30x faster deployment = capture market opportunities before competitors

**CTO Value (Technology Strategy & Performance):**
- Product competitive advantage through superior AI performance
- Engineering team focus on innovation vs infrastructure maintenance
- Technology risk mitigation through multi-cloud architecture
- Proven reliability (99.99% uptime) protecting product reputation

**CIO Value (Operations & Risk Management):**
- Enterprise-proven scale and reliability
- Business continuity through redundant multi-cloud deployment
- Operational risk reduction with professional SLAs and support
- Compliance and security for regulated industries

**CFO Value (Financial Impact & ROI):**
- 225% better cost-performance = quantifiable budget optimization
- Faster time-to-market = accelerated revenue realization
- Engineering cost efficiency = improved team ROI and resource allocation
- Predictable pricing model vs consumption-based budget uncertainty

ENTERPRISE PROOF POINTS:
- Writer: 60% custom LLM performance improvement = competitive product advantage
- Bland AI: Sub-400ms phone calls = breakthrough user experience capabilities
- Scale validation: Hundreds of millions of users served = enterprise-grade reliability
- Market leadership: Top performance rankings = technical credibility and market position

Format this as executive briefing material with role-specific value propositions focused on strategic business outcomes."#;

/// Builds the user prompt for an analysis request.
///
/// Pure: the same request always yields the same text. The industry clause
/// is only rendered when an industry is present; the competitive analysis
/// template has no industry slot.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    match request.mode {
        AnalysisMode::CompetitiveAnalysis => COMPETITIVE_ANALYSIS_TEMPLATE.to_string(),
        AnalysisMode::PainPoints => {
            let industry_context = request
                .industry
                .as_ref()
                .map(|industry| format!(" in the {} industry", industry))
                .unwrap_or_default();
            PAIN_POINTS_TEMPLATE.replace(INDUSTRY_PLACEHOLDER, &industry_context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Industry;
    use proptest::prelude::*;

    const INDUSTRIES: [&str; 3] = ["", "healthcare", "finance"];

    fn requests() -> Vec<AnalysisRequest> {
        INDUSTRIES
            .iter()
            .flat_map(|industry| {
                vec![
                    AnalysisRequest {
                        mode: AnalysisMode::CompetitiveAnalysis,
                        industry: Industry::parse(industry),
                    },
                    AnalysisRequest::pain_points(industry),
                ]
            })
            .collect()
    }

    #[test]
    fn should_build_identical_prompts_for_identical_requests() {
        for request in requests() {
            assert_eq!(build_prompt(&request), build_prompt(&request.clone()));
        }
    }

    #[test]
    fn should_omit_industry_clause_when_industry_is_empty() {
        let prompt = build_prompt(&AnalysisRequest::pain_points(""));

        assert!(prompt.contains("analyze pain points that enterprises face when scaling"));
        assert!(!prompt.contains("in the  industry"));
        assert!(!prompt.contains("in the industry"));
        assert!(!prompt.contains(INDUSTRY_PLACEHOLDER));
    }

    #[test]
    fn should_include_industry_clause_when_industry_is_present() {
        let prompt = build_prompt(&AnalysisRequest::pain_points("healthcare"));

        assert!(prompt.contains(
            "analyze pain points that enterprises in the healthcare industry face when scaling"
        ));
        assert!(!prompt.contains(INDUSTRY_PLACEHOLDER));
    }

    #[test]
    fn should_ignore_industry_for_competitive_analysis() {
        let with_industry = AnalysisRequest {
            mode: AnalysisMode::CompetitiveAnalysis,
            industry: Industry::parse("finance"),
        };

        assert_eq!(
            build_prompt(&with_industry),
            build_prompt(&AnalysisRequest::competitive_analysis())
        );
        assert!(!build_prompt(&with_industry).contains("finance"));
    }

    #[test]
    fn should_produce_different_prompts_per_mode() {
        assert_ne!(
            build_prompt(&AnalysisRequest::competitive_analysis()),
            build_prompt(&AnalysisRequest::pain_points(""))
        );
    }

    proptest! {
        #[test]
        fn should_be_deterministic_for_any_industry(industry in "\\PC{0,40}") {
            let request = AnalysisRequest::pain_points(&industry);
            prop_assert_eq!(build_prompt(&request), build_prompt(&request));
        }

        #[test]
        fn should_never_leave_placeholder_or_blank_clause(industry in " {0,2}[a-zA-Z]{0,12} {0,2}") {
            let prompt = build_prompt(&AnalysisRequest::pain_points(&industry));
            prop_assert!(!prompt.contains(INDUSTRY_PLACEHOLDER));
            prop_assert!(!prompt.contains("in the  industry"));
        }
    }
}
