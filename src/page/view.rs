//! HTML rendering for the drafting page.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::judgment::Generation;

const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("index.html");

pub const BANNER_URL: &str = "/static/banner.png";
pub const DESCRIPTION: &str =
    "관련 법률, 선행 판결문을 기반으로 상황에 따라 이혼 판결문을 생성해주는 서비스입니다.";
pub const INPUT_LABEL: &str = "이혼 상황에 대해 설명해주세요.";
pub const SUBMIT_LABEL: &str = "판결문 생성";
pub const SPINNER_LABEL: &str = "판결문 생성 중...";
pub const EMPTY_INPUT_WARNING: &str = "상황을 입력해주세요.";
pub const DOWNLOAD_LABEL: &str = "텍스트 파일 다운로드";
pub const RESULT_HEADING: &str = "생성된 판결문";

/// Generated text as shown on the page.
#[derive(Debug, Serialize)]
pub struct PageResult {
    pub text: String,
    /// Export bytes in form-safe encoding, posted back to `/download`.
    pub download: String,
    pub failed: bool,
}

impl From<&Generation> for PageResult {
    fn from(generation: &Generation) -> Self {
        Self {
            text: generation.display_text(),
            download: generation.export().to_form_value(),
            failed: generation.is_failure(),
        }
    }
}

/// Everything that varies between renders of the page.
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    pub situation: String,
    /// Blocks generation: the submit control is not rendered.
    pub template_error: Option<String>,
    pub warning: Option<String>,
    pub result: Option<PageResult>,
}

impl PageView {
    pub fn template_unavailable(situation: String, message: String) -> Self {
        Self {
            situation,
            template_error: Some(message),
            ..Self::default()
        }
    }

    pub fn empty_input(situation: String) -> Self {
        Self {
            situation,
            warning: Some(EMPTY_INPUT_WARNING.to_string()),
            ..Self::default()
        }
    }

    pub fn generated(situation: String, generation: &Generation) -> Self {
        Self {
            situation,
            result: Some(PageResult::from(generation)),
            ..Self::default()
        }
    }
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(PAGE_TEMPLATE_NAME)?;
        template.render(context! {
            banner_url => BANNER_URL,
            description => DESCRIPTION,
            input_label => INPUT_LABEL,
            submit_label => SUBMIT_LABEL,
            spinner_label => SPINNER_LABEL,
            download_label => DOWNLOAD_LABEL,
            result_heading => RESULT_HEADING,
            situation => &view.situation,
            template_error => &view.template_error,
            warning => &view.warning,
            result => &view.result,
        })
    }
}
