use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

use macro_finance_core::course::materials::{self, MaterialStatus};
use macro_finance_core::course::{quiz, session};

use super::CommandResult;
use crate::config::AppConfig;

/// Arguments for rendering a session page
#[derive(Args)]
pub struct SessionArgs {
    /// Page slug (e.g. `home`, `session-1`); lists the pages when omitted
    pub slug: Option<String>,
}

/// Arguments for the end-of-session quiz
#[derive(Args)]
pub struct QuizArgs {
    /// Question number to answer; lists the questions when omitted
    #[arg(long, short)]
    pub question: Option<u8>,

    /// Chosen option, counting from 1
    #[arg(long, short, requires = "question")]
    pub answer: Option<usize>,
}

/// Arguments for locating a session's PDF summary
#[derive(Args)]
pub struct MaterialsArgs {
    /// Page slug
    #[arg(default_value = "session-1")]
    pub slug: String,

    /// Copy the PDF into this directory under its download name
    #[arg(long)]
    pub export_to: Option<PathBuf>,
}

pub fn run_session(args: SessionArgs, config: &AppConfig) -> CommandResult {
    let Some(slug) = args.slug else {
        let pages: Vec<Value> = session::catalogue()
            .iter()
            .map(|p| json!({ "slug": p.slug, "title": p.title }))
            .collect();
        return Ok(json!({ "result": { "pages": pages } }));
    };

    let page = session::find_page(&slug)?;
    let material = materials::locate_material(&config.materials_dir, &page);

    let mut markdown = page.render_markdown();
    if let Some(MaterialStatus::Missing { message, .. }) = &material {
        markdown.push_str(&format!("\n> {message}\n"));
    }

    Ok(json!({
        "page": page,
        "material": material,
        "markdown": markdown,
    }))
}

pub fn run_quiz(args: QuizArgs) -> CommandResult {
    let Some(question) = args.question else {
        return Ok(json!({ "result": { "questions": quiz::questions() } }));
    };
    let answer = args.answer.ok_or("--answer is required when grading a question")?;
    let choice = answer
        .checked_sub(1)
        .ok_or("--answer counts from 1")?;

    let outcome = quiz::grade(question, choice)?;
    Ok(json!({ "result": outcome, "question": question, "answer": answer }))
}

pub fn run_materials(args: MaterialsArgs, config: &AppConfig) -> CommandResult {
    let page = session::find_page(&args.slug)?;

    if let Some(dest) = args.export_to {
        let target = materials::export_material(&config.materials_dir, &page, &dest)?;
        return Ok(json!({ "result": { "exported": target } }));
    }

    let status = materials::locate_material(&config.materials_dir, &page)
        .ok_or_else(|| format!("Session '{}' has no downloadable summary", page.slug))?;
    Ok(json!({ "result": status }))
}
