use prgate_ghapi_interface::ApiService;
use prgate_models::ApprovalPolicy;

use crate::CoreModule;

/// Options driving one evaluation, resolved once before the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalSettings {
    /// Approval policy.
    pub policy: ApprovalPolicy,
    /// Any change request in the history blocks the approval, even when
    /// the same reviewer approved afterwards.
    pub check_changes_requested: bool,
    /// Evaluate events carrying no review state (labels, pushes...).
    pub evaluate_without_review: bool,
}

impl Default for ApprovalSettings {
    fn default() -> Self {
        Self {
            policy: ApprovalPolicy::default(),
            check_changes_requested: true,
            evaluate_without_review: false,
        }
    }
}

pub struct CoreContext<'a> {
    pub settings: &'a ApprovalSettings,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(test)]
pub(crate) mod tests {
    use prgate_ghapi_interface::MockApiService;

    use super::ApprovalSettings;
    use crate::{CoreContext, CoreModule};

    pub struct CoreContextTest {
        pub settings: ApprovalSettings,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        pub fn new() -> Self {
            Self {
                settings: ApprovalSettings::default(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                settings: &self.settings,
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
