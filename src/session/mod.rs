use crate::errors::PlanError;
use crate::plan::{GeneratedLessonPlan, LessonPlanInput};
use crate::prompt;
use crate::provider::DynProvider;
use crate::wire::{response_schema, GenRequest};

/// User-facing failure messages shown when a generate or edit call fails.
pub const GENERATE_ERROR_MSG: &str = "Đã xảy ra lỗi khi tạo giáo án. Vui lòng thử lại.";
pub const EDIT_ERROR_MSG: &str = "Đã xảy ra lỗi khi chỉnh sửa giáo án. Vui lòng thử lại.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Editing,
}

/// Holds the form input, the current record and the in-flight/error flags.
/// All mutation goes through the transitions below; at most one generate or
/// edit can be outstanding at a time.
pub struct PlanSession {
    input: LessonPlanInput,
    plan: Option<GeneratedLessonPlan>,
    error: Option<String>,
    phase: Phase,
    temperature: f32,
}

impl PlanSession {
    pub fn new(input: LessonPlanInput, temperature: f32) -> Self {
        Self {
            input,
            plan: None,
            error: None,
            phase: Phase::Idle,
            temperature,
        }
    }

    pub fn input(&self) -> &LessonPlanInput {
        &self.input
    }

    pub fn plan(&self) -> Option<&GeneratedLessonPlan> {
        self.plan.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// idle -> generating. Requires valid input; clears any previous record
    /// and error.
    fn begin_generate(&mut self) -> Result<GenRequest, PlanError> {
        if self.is_busy() {
            return Err(PlanError::Validation("a request is already in flight".into()));
        }
        self.input.validate()?;
        self.plan = None;
        self.error = None;
        self.phase = Phase::Generating;
        Ok(GenRequest {
            prompt: prompt::generation_prompt(&self.input),
            response_schema: response_schema(),
            temperature: self.temperature,
        })
    }

    /// idle (with record) -> editing. The existing record stays visible.
    fn begin_edit(&mut self, instruction: &str) -> Result<GenRequest, PlanError> {
        if self.is_busy() {
            return Err(PlanError::Validation("a request is already in flight".into()));
        }
        if instruction.trim().is_empty() {
            return Err(PlanError::Validation("edit instruction is empty".into()));
        }
        let current = self
            .plan
            .as_ref()
            .ok_or_else(|| PlanError::Validation("no lesson plan to edit".into()))?;
        let prompt = prompt::edit_prompt(current, instruction)
            .map_err(|e| PlanError::Generation(e.to_string()))?;
        self.error = None;
        self.phase = Phase::Editing;
        Ok(GenRequest {
            prompt,
            response_schema: response_schema(),
            temperature: self.temperature,
        })
    }

    /// generating/editing -> idle. Success replaces the record wholesale;
    /// failure stores the localized message. A failed edit leaves the last
    /// good record untouched; a failed generation leaves the view empty.
    fn finish(&mut self, outcome: Result<GeneratedLessonPlan, PlanError>) {
        match outcome {
            Ok(plan) => {
                self.plan = Some(plan);
                self.error = None;
            }
            Err(err) => {
                let msg = match self.phase {
                    Phase::Editing => EDIT_ERROR_MSG,
                    _ => GENERATE_ERROR_MSG,
                };
                eprintln!("error: {}", err);
                self.error = Some(msg.to_string());
            }
        }
        self.phase = Phase::Idle;
    }

    pub async fn generate(&mut self, provider: &DynProvider, debug: bool) -> Result<GenRequest, PlanError> {
        let req = self.begin_generate()?;
        let outcome = provider
            .send(&req, debug)
            .await
            .map_err(|e| PlanError::Generation(e.to_string()));
        self.finish(outcome);
        Ok(req)
    }

    pub async fn edit(
        &mut self,
        provider: &DynProvider,
        instruction: &str,
        debug: bool,
    ) -> Result<GenRequest, PlanError> {
        let req = self.begin_edit(instruction)?;
        let outcome = provider
            .send(&req, debug)
            .await
            .map_err(|e| PlanError::Generation(e.to_string()));
        self.finish(outcome);
        Ok(req)
    }
}
