//! Builds the rmcp ToolRouter from the enabled toolsets.

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Toolset;

use super::context::ToolContext;
use super::definitions::{
    ArithmeticTool, GetJokeTool, GetTimeTool, Operation, PayrixListTool, PayrixLookupTool,
    PayrixResource,
};

/// Build the tool router. Tools of disabled toolsets are left out.
pub fn build_tool_router<S>(context: &ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let config = &context.config;
    let mut router = ToolRouter::new();

    if config.has_toolset(Toolset::Payrix) {
        for resource in PayrixResource::ALL {
            router = router
                .with_route(PayrixListTool::create_route(resource, context.payrix.clone()))
                .with_route(PayrixLookupTool::create_route(resource, context.payrix.clone()));
        }
    }

    if config.has_toolset(Toolset::Calculator) {
        for op in Operation::ALL {
            router = router.with_route(ArithmeticTool::create_route(op));
        }
    }

    if config.has_toolset(Toolset::Joke) {
        router = router.with_route(GetJokeTool::create_route(context.jokes.clone()));
    }

    if config.has_toolset(Toolset::Time) {
        router = router.with_route(GetTimeTool::create_route());
    }

    router
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;

    struct TestServer {}

    fn context_with(toolsets: Vec<Toolset>) -> ToolContext {
        let config = Config {
            toolsets,
            ..Config::default()
        };
        ToolContext::new(Arc::new(config)).unwrap()
    }

    #[test]
    fn test_build_router_all_toolsets() {
        let router: ToolRouter<TestServer> = build_tool_router(&context_with(Toolset::ALL.to_vec()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"getMerchants"));
        assert!(names.contains(&"getMerchantsId"));
        assert!(names.contains(&"getTxns"));
        assert!(names.contains(&"getTxnsId"));
        assert!(names.contains(&"divide"));
        assert!(names.contains(&"get_joke"));
        assert!(names.contains(&"get_time"));
    }

    #[test]
    fn test_build_router_respects_toolsets() {
        let router: ToolRouter<TestServer> = build_tool_router(&context_with(vec![Toolset::Time]));
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "get_time");
    }

    #[test]
    fn test_registry_matches_router() {
        for toolsets in [Toolset::ALL.to_vec(), vec![Toolset::Payrix, Toolset::Joke], vec![]] {
            let context = context_with(toolsets);
            let registry = ToolRegistry::new(context.clone());
            let registry_names = registry.tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(&context);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name));
            }
        }
    }
}
