//! The S3 endpoint rule set: compiled graph, conditions and results.

mod conditions;
mod results;
mod table;

pub use conditions::CONDITION_COUNT;
pub use results::{RESULT_COUNT, RuleResult};
pub use table::{S3_RULES, S3_RULES_LEN};

use crate::graph::{DecisionGraph, ROOT};

/// The compiled S3 rule graph.
pub static S3_GRAPH: DecisionGraph = DecisionGraph::from_static(&S3_RULES, ROOT);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EvalContext;
    use crate::functions::PartitionResolver;
    use crate::params::Params;

    #[test]
    fn test_should_validate_embedded_graph() {
        assert_eq!(S3_RULES_LEN % 3, 0);
        assert_eq!(S3_GRAPH.node_count(), 709);
        assert_eq!(S3_GRAPH.root(), ROOT);
        assert_eq!(S3_GRAPH.validate_bounds(CONDITION_COUNT, RESULT_COUNT), Ok(()));
    }

    #[test]
    fn test_should_compute_each_derived_value_once_per_walk() {
        let params = Params::builder()
            .region("us-west-2")
            .bucket("arn:aws:s3:us-west-2:123456789012:accesspoint:my-ap")
            .build();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        let index = S3_GRAPH.walk(|id| ctx.condition(id)).unwrap();
        assert!(matches!(ctx.result(index).unwrap(), RuleResult::Endpoint(_)));

        let d = &ctx.derived;
        assert_eq!(d.bucket_arn.computations(), 1);
        assert_eq!(d.partition_result.computations(), 1);
        assert_eq!(d.bucket_partition.computations(), 1);
        assert_eq!(d.arn_type.computations(), 1);
        assert_eq!(d.region_partition.computations(), 0);
        assert_eq!(d.mrap_partition.computations(), 0);
        assert_eq!(d.url.computations(), 0);
    }

    #[test]
    fn test_should_reach_every_result() {
        let mut seen = [false; RESULT_COUNT];
        for &reference in &S3_RULES[3..] {
            if reference > crate::graph::RESULT_OFFSET {
                let index = usize::try_from(reference - crate::graph::RESULT_OFFSET - 1).unwrap();
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
