//! Semantic analysis for COOL.
//!
//! Four cooperating passes over one shared [`Context`] and one [`ScopeTree`]:
//! the [`TypeCollector`] registers every class name, the [`TypeBuilder`] wires
//! the inheritance graph and defines all features, the [`TypeChecker`] assigns
//! a static type to every expression while building the scope tree, and the
//! [`TypeInferer`] closes the remaining `AUTO_TYPE` holes by iterating to a
//! fixed point.
mod builder;
mod checker;
mod collector;
mod context;
mod error;
mod inferer;
mod info;
mod scope;
mod types;

pub use self::builder::TypeBuilder;
pub use self::checker::TypeChecker;
pub use self::collector::TypeCollector;
pub use self::context::{Context, AUTO_TYPE, SELF_TYPE};
pub use self::error::{ErrorKind, SemanticError};
pub use self::inferer::TypeInferer;
pub use self::info::TypeInfo;
pub use self::scope::{Scope, ScopeId, ScopeTree, VariableInfo};
pub use self::types::{Attribute, Method, Type, TypeId};

use log::{debug, warn};

use crate::ast::Ast;

/// Everything the analysis produces: the enriched type table, the scope tree,
/// the typed AST, the accumulated errors, and one line per inferred variable.
#[derive(Debug)]
pub struct Analysis {
    pub context: Context,
    pub scope: ScopeTree,
    pub ast: Ast<TypeInfo>,
    pub errors: Vec<SemanticError>,
    pub inferences: Vec<String>,
}

/// Run collect, build, check and the inference fixed point over a parsed
/// program. Errors never interrupt the analysis; whatever cannot be typed is
/// carried as `<error>` so later stages stay quiet about it.
pub fn analyze(ast: &Ast<()>) -> Analysis {
    let mut errors = vec![];

    let mut collector = TypeCollector::new(&mut errors);
    collector.collect(ast);
    let mut context = collector.context;

    let mut builder = TypeBuilder::new(&mut context, &mut errors);
    builder.build(ast);

    let checker = TypeChecker::new(&context, &mut errors);
    let (mut typed, mut scope) = checker.check(ast);

    let mut inferences = vec![];
    let open = scope.open_variables() + context.open_slots();
    let limit = 2 * (open + 1);
    debug!("starting inference with {open} open variables");

    let mut passes = 0;
    let mut inferer = TypeInferer::new(&mut context, &mut scope, &mut inferences);
    while inferer.infer(&mut typed) {
        passes += 1;
        if passes >= limit {
            warn!("type inference did not settle after {passes} passes");
            break;
        }
    }

    Analysis {
        context,
        scope,
        ast: typed,
        errors,
        inferences,
    }
}
