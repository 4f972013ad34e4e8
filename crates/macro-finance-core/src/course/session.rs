//! Session pages and the page template used to build them.

use serde::{Deserialize, Serialize};

use super::controls::Calculator;
use crate::error::MacroFinanceError;
use crate::MacroFinanceResult;

/// One titled block of a session page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    /// Markdown with inline/display LaTeX
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub calculators: Vec<Calculator>,
}

/// A training session page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPage {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// PDF summary, relative to the materials directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<String>,
    /// File name offered to the user when downloading the PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_name: Option<String>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Builder for [`SessionPage`]; every page goes through the same template.
#[derive(Debug, Clone)]
pub struct SessionPageBuilder {
    page: SessionPage,
}

impl SessionPageBuilder {
    pub fn new(slug: &str, title: &str) -> Self {
        Self {
            page: SessionPage {
                slug: slug.to_string(),
                title: title.to_string(),
                description: String::new(),
                pdf_path: None,
                download_name: None,
                sections: Vec::new(),
                caption: None,
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.page.description = description.trim().to_string();
        self
    }

    /// Attach a PDF summary. Without an explicit download name the file name
    /// of `path` is offered.
    pub fn pdf(mut self, path: &str, download_name: Option<&str>) -> Self {
        let name = download_name
            .map(str::to_string)
            .unwrap_or_else(|| path.rsplit('/').next().unwrap_or(path).to_string());
        self.page.pdf_path = Some(path.to_string());
        self.page.download_name = Some(name);
        self
    }

    pub fn section(mut self, heading: &str, body: &str) -> Self {
        self.page.sections.push(Section {
            heading: heading.to_string(),
            body: body.trim().to_string(),
            calculators: Vec::new(),
        });
        self
    }

    pub fn interactive_section(mut self, heading: &str, body: &str, calculators: &[Calculator]) -> Self {
        self.page.sections.push(Section {
            heading: heading.to_string(),
            body: body.trim().to_string(),
            calculators: calculators.to_vec(),
        });
        self
    }

    pub fn caption(mut self, caption: &str) -> Self {
        self.page.caption = Some(caption.to_string());
        self
    }

    pub fn build(self) -> SessionPage {
        self.page
    }
}

impl SessionPage {
    /// Calculators referenced by the page, in order of appearance.
    pub fn calculators(&self) -> Vec<Calculator> {
        self.sections
            .iter()
            .flat_map(|s| s.calculators.iter().copied())
            .collect()
    }

    /// Render the page as Markdown.
    pub fn render_markdown(&self) -> String {
        let mut out = format!("# {}\n\n{}\n", self.title, self.description);
        for section in &self.sections {
            out.push_str(&format!("\n## {}\n\n{}\n", section.heading, section.body));
            for calc in &section.calculators {
                out.push_str(&format!("\n> {}\n", calc.title()));
                for control in calc.controls() {
                    out.push_str(&format!(
                        ">  - {}: {} (range {} to {}, step {})\n",
                        control.label, control.default, control.min, control.max, control.step
                    ));
                }
            }
        }
        if let Some(name) = &self.download_name {
            out.push_str(&format!("\n## Download Summary\n\n{name}\n"));
        }
        if let Some(caption) = &self.caption {
            out.push_str(&format!("\n---\n_{caption}_\n"));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

pub fn home() -> SessionPage {
    SessionPageBuilder::new("home", "ECI Internal Training – Macro-Finance")
        .description(
            "Welcome to the internal training platform for **macro-finance and climate risk**.",
        )
        .section(
            "How this course is organised",
            r#"
Each session mirrors one lecture of the training cycle and contains:
- a summary of the lecture slides
- key concepts
- formulas and derivations
- optional reading
- downloadable notes

Use `mfin session <slug>` to open a session."#,
        )
        .build()
}

pub fn session_one() -> SessionPage {
    SessionPageBuilder::new("session-1", "Session 1 — Asset Pricing Foundations")
        .description(
            r#"
Microfoundations of asset pricing and the main pricing frameworks:
- **Optimization fundamentals** (FOCs, KKT conditions)
- **The time dimension** (intertemporal substitution, Fisher's model)
- **The risk dimension** (contingent claims, Arrow-Debreu pricing)
- **General equilibrium** (Pareto optimality, welfare theorems)
- **Asset pricing approaches** (safe vs. risky cash flows, no-arbitrage vs. equilibrium)"#,
        )
        .interactive_section(
            "1. Microfoundations: The Time Dimension",
            r#"
Asset pricing starts from **intertemporal choice**: how agents split consumption between today and tomorrow.

Fisher's two-period model:
$$U = u(c_0) + \beta u(c_1)$$

$\beta$ is the discount factor and a concave $u$ expresses a preference for smooth consumption.
The lifetime budget constraint is $Y_0 + \frac{Y_1}{1+r} = c_0 + \frac{c_1}{1+r}$ and the optimum satisfies
$$\frac{u'(c_0)}{\beta u'(c_1)} = 1+r$$"#,
            &[Calculator::IntertemporalChoice],
        )
        .interactive_section(
            "2. Microfoundations: The Risk Dimension",
            r#"
Uncertain future income calls for **contingent claims** (Arrow-Debreu securities):
- $q_G$ = price of a claim paying \$1 in the **good state**
- $q_B$ = price of a claim paying \$1 in the **bad state**

Expected utility:
$$U = u(c_0) + \beta[\pi u(c_1^G) + (1-\pi)u(c_1^B)]$$

Budget constraint:
$$Y_0 + q_G Y_1^G + q_B Y_1^B \geq c_0 + q_G c_1^G + q_B c_1^B$$

The state with **lower** consumption has **higher** marginal utility, so claims on it are dearer (insurance principle)."#,
            &[Calculator::ContingentClaims],
        )
        .interactive_section(
            "3. General Equilibrium Insights",
            r#"
In a two-consumer economy an allocation is Pareto optimal when $MRS_1 = MRS_2$.

1. **First Welfare Theorem**: every competitive equilibrium is Pareto optimal (CE ⇒ PO)
2. **Second Welfare Theorem**: every Pareto optimal allocation can be supported as a competitive equilibrium with suitable prices (PO ⇒ CE)"#,
            &[Calculator::ParetoOptimality],
        )
        .interactive_section(
            "4. Pricing Safe Cash Flows",
            r#"
**Discount bond** paying \$1 at maturity $T$:
$$P_T = \frac{1}{(1+r_T)^T}$$

**Coupon bond** paying $C$ each year and face value $F$ at maturity:
$$P_T^C = \sum_{t=1}^T \frac{C}{(1+r_t)^t} + \frac{F}{(1+r_T)^T}$$"#,
            &[Calculator::DiscountBond, Calculator::CouponBond],
        )
        .interactive_section(
            "5. Pricing Risky Cash Flows",
            r#"
Three equivalent approaches:

1. **Risk-adjusted discounting**: $P_t = \frac{E(\tilde{C}_t) - \Psi_t}{(1+r_t)^t}$
2. **Arrow-Debreu**: $P_t = \sum_i q_{t,i} C_{t,i}$
3. **Risk-neutral pricing**: $P_t = \frac{\hat{E}(C_t)}{(1+r_t)^t}$ with risk-neutral probabilities $\hat{\pi}_i$

Arrow-Debreu is the most fundamental; the other two are convenient reformulations."#,
            &[Calculator::RiskyAssetPricing],
        )
        .section(
            "6. No-Arbitrage vs. Equilibrium",
            r#"
**No-arbitrage** takes some prices as given and derives others by replication,
e.g. a coupon bond from discount bond prices.

**Equilibrium** derives all prices jointly from preferences, endowments and technology,
e.g. state prices from consumer FOCs.

No-arbitrage is simpler but less fundamental; equilibrium gives deeper insight but needs more structure."#,
        )
        .section(
            "Key Takeaways",
            r#"
1. **Intertemporal choice**: agents smooth consumption using $\beta$ and $r$
2. **Risk and states**: uncertain outcomes call for state-contingent claims
3. **Contingent claim prices**: low-consumption states carry high marginal utility (insurance)
4. **General equilibrium**: competitive equilibria are Pareto optimal
5. **Safe asset pricing**: discount certain cash flows at risk-free rates
6. **Risky asset pricing**: risk-adjusted, Arrow-Debreu and risk-neutral approaches
7. **Two perspectives**: no-arbitrage vs. equilibrium"#,
        )
        .pdf("session1_summary.pdf", Some("session1_asset_pricing_foundations.pdf"))
        .caption("Session 1 • Asset Pricing Foundations")
        .build()
}

/// All pages, home first.
pub fn catalogue() -> Vec<SessionPage> {
    vec![home(), session_one()]
}

/// Look a page up by slug.
pub fn find_page(slug: &str) -> MacroFinanceResult<SessionPage> {
    catalogue()
        .into_iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| MacroFinanceError::InvalidInput {
            field: "session".into(),
            reason: format!("Unknown session '{slug}'"),
        })
}
