// Page handlers for HTML rendering with Askama

use axum::response::Html;
use axum::Form;
use askama::Template;
use axum_htmx::HxRequest;

use crate::api_server::AppError;
use crate::calculator::{Footprint, FootprintCalculator, Variant};
use crate::session::{WizardAction, WizardSession};
use crate::web::view_models::WizardView;

// ============================================================================
// Home Page
// ============================================================================

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct VariantLink {
    pub slug: &'static str,
    pub name: &'static str,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub features: Vec<FeatureCard>,
    pub stats: Vec<Stat>,
    pub variants: Vec<VariantLink>,
}

pub async fn home_page() -> Result<Html<String>, AppError> {
    let template = HomeTemplate {
        title: "Karbon Ayak İzinizi Keşfedin".to_string(),
        features: vec![
            FeatureCard {
                title: "Kolay Hesaplama",
                description: "Birkaç basit soruyla karbon ayak izinizi hesaplayın",
            },
            FeatureCard {
                title: "Azaltma Önerileri",
                description: "Kişiselleştirilmiş çevre dostu öneriler alın",
            },
            FeatureCard {
                title: "Çevre Bilinci",
                description: "Gezegenimizi korumak için attığınız adımları izleyin",
            },
        ],
        stats: vec![
            Stat { number: "2.4M+", label: "Hesaplanan Ayak İzi" },
            Stat { number: "15%", label: "Ortalama Azalma" },
            Stat { number: "50+", label: "Azaltma Önerisi" },
            Stat { number: "24/7", label: "Erişilebilir" },
        ],
        variants: [Variant::Habits, Variant::Usage]
            .iter()
            .map(|v| VariantLink { slug: v.as_str(), name: v.display_name() })
            .collect(),
    };
    Ok(Html(template.render()?))
}

// ============================================================================
// Calculator Wizard
// ============================================================================

#[derive(Template)]
#[template(path = "pages/calculator.html")]
pub struct CalculatorTemplate {
    pub title: String,
    pub wizard: WizardView,
}

/// Wizard card alone, swapped in by HTMX
#[derive(Template)]
#[template(path = "partials/wizard.html")]
pub struct WizardPartial {
    pub wizard: WizardView,
}

fn render_wizard<C: FootprintCalculator>(
    session: &WizardSession<C>,
    fragment: bool,
) -> Result<Html<String>, AppError> {
    let wizard = WizardView::from_session(session);
    let html = if fragment {
        WizardPartial { wizard }.render()?
    } else {
        CalculatorTemplate {
            title: format!("{} - {}", wizard.step_title, wizard.variant_name),
            wizard,
        }
        .render()?
    };
    Ok(Html(html))
}

/// GET: a fresh session at the first step
pub async fn calculator_page<C: FootprintCalculator>() -> Result<Html<String>, AppError> {
    render_wizard(&WizardSession::<C>::new(), false)
}

/// POST: rebuild the session from the form, apply the edits and the
/// navigation action, render the next state.
pub async fn calculator_step<C: FootprintCalculator>(
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let mut step = 0;
    let mut result = None;
    let mut action = None;
    let mut fields = Vec::with_capacity(form.len());

    for (key, value) in &form {
        match key.as_str() {
            "step" => step = value.trim().parse().unwrap_or(0),
            "result" => result = value.trim().parse::<u64>().ok().map(Footprint::from_kg),
            "action" => action = WizardAction::parse(value),
            _ => fields.push((key.as_str(), value.as_str())),
        }
    }

    let session = WizardSession::<C>::restore(step, result, fields);
    let session = match action {
        Some(action) => session.apply(action),
        None => session,
    };

    tracing::debug!(
        variant = C::variant().as_str(),
        step = session.step(),
        action = action.map(|a| a.as_str()).unwrap_or("none"),
        htmx = is_htmx,
        "Wizard transition"
    );

    render_wizard(&session, is_htmx)
}
