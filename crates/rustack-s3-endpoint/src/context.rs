//! Per-resolution evaluation state.
//!
//! Conditions in the decision graph do two things: they test the request
//! parameters, and some of them bind a derived value (a parsed ARN, a
//! partition, a slice of the bucket name) that later conditions and the
//! endpoint templates read. [`EvalContext`] owns those bindings for exactly
//! one resolution and is dropped with it.

#[cfg(test)]
use std::cell::Cell;
use std::cell::OnceCell;

use crate::error::{EndpointError, EndpointResult};
use crate::functions::{Arn, ParsedUrl, Partition, PartitionResolver};
use crate::params::Params;

/// A derived value bound at most once per resolution.
///
/// A slot has three states: never computed, computed as absent, and
/// computed with a value. The first assignment wins; a later assignment of
/// the same slot on the same walk is a no-op that reports the stored value.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    name: &'static str,
    cell: OnceCell<Option<T>>,
    #[cfg(test)]
    computations: Cell<usize>,
}

impl<T> Slot<T> {
    /// An empty slot named after the rule-set variable it holds.
    #[must_use]
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
            #[cfg(test)]
            computations: Cell::new(0),
        }
    }

    /// Compute the value if the slot is empty; returns whether it holds one.
    pub(crate) fn assign(&self, compute: impl FnOnce() -> Option<T>) -> bool {
        self.cell
            .get_or_init(|| {
                #[cfg(test)]
                self.computations.set(self.computations.get() + 1);
                compute()
            })
            .is_some()
    }

    /// The stored value, `Ok(None)` if it was computed as absent.
    ///
    /// # Errors
    ///
    /// [`EndpointError::UnsetDerived`] if no condition computed the slot.
    pub(crate) fn computed(&self) -> EndpointResult<Option<&T>> {
        self.cell
            .get()
            .map(Option::as_ref)
            .ok_or(EndpointError::UnsetDerived { field: self.name })
    }

    /// The stored value, which must be present.
    ///
    /// # Errors
    ///
    /// [`EndpointError::UnsetDerived`] if the slot was never computed or was
    /// computed as absent.
    pub(crate) fn value(&self) -> EndpointResult<&T> {
        self.computed()?
            .ok_or(EndpointError::UnsetDerived { field: self.name })
    }

    /// Whether any condition has computed the slot.
    #[cfg(test)]
    pub(crate) fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times a value was computed for this slot.
    #[cfg(test)]
    pub(crate) fn computations(&self) -> usize {
        self.computations.get()
    }
}

/// Values bound by conditions while the graph is walked.
#[derive(Debug)]
pub(crate) struct Derived<'a> {
    pub(crate) s3e_auth: Slot<&'static str>,
    pub(crate) bucket_alias_suffix: Slot<&'a str>,
    pub(crate) region_prefix: Slot<&'a str>,
    pub(crate) outpost_id_ssa_2: Slot<&'a str>,
    pub(crate) hardware_type: Slot<&'a str>,
    pub(crate) s3e_fips: Slot<&'static str>,
    pub(crate) region_partition: Slot<&'a Partition>,
    pub(crate) s3e_ds: Slot<&'static str>,
    pub(crate) partition_result: Slot<&'a Partition>,
    pub(crate) url: Slot<ParsedUrl>,
    pub(crate) bucket_arn: Slot<Arn>,
    pub(crate) uri_encoded_bucket: Slot<String>,
    pub(crate) arn_type: Slot<String>,
    pub(crate) access_point_name_ssa_1: Slot<String>,
    pub(crate) outpost_id_ssa_1: Slot<String>,
    pub(crate) bucket_partition: Slot<&'a Partition>,
    pub(crate) s3express_availability_zone_id: Slot<&'a str>,
    pub(crate) outpost_type: Slot<String>,
    pub(crate) access_point_name_ssa_2: Slot<String>,
    pub(crate) mrap_partition: Slot<&'a Partition>,
}

impl Default for Derived<'_> {
    fn default() -> Self {
        Self {
            s3e_auth: Slot::new("s3e_auth"),
            bucket_alias_suffix: Slot::new("bucketAliasSuffix"),
            region_prefix: Slot::new("regionPrefix"),
            outpost_id_ssa_2: Slot::new("outpostId_ssa_2"),
            hardware_type: Slot::new("hardwareType"),
            s3e_fips: Slot::new("s3e_fips"),
            region_partition: Slot::new("regionPartition"),
            s3e_ds: Slot::new("s3e_ds"),
            partition_result: Slot::new("partitionResult"),
            url: Slot::new("url"),
            bucket_arn: Slot::new("bucketArn"),
            uri_encoded_bucket: Slot::new("uri_encoded_bucket"),
            arn_type: Slot::new("arnType"),
            access_point_name_ssa_1: Slot::new("accessPointName_ssa_1"),
            outpost_id_ssa_1: Slot::new("outpostId_ssa_1"),
            bucket_partition: Slot::new("bucketPartition"),
            s3express_availability_zone_id: Slot::new("s3expressAvailabilityZoneId"),
            outpost_type: Slot::new("outpostType"),
            access_point_name_ssa_2: Slot::new("accessPointName_ssa_2"),
            mrap_partition: Slot::new("mrapPartition"),
        }
    }
}

/// State for a single resolution: the caller's parameters, the partition
/// table to consult and every derived value bound so far.
///
/// Contexts are cheap to build and never shared between resolutions, so
/// concurrent resolutions cannot observe each other's bindings.
#[derive(Debug)]
pub(crate) struct EvalContext<'a> {
    pub(crate) params: &'a Params,
    pub(crate) partitions: &'a PartitionResolver,
    pub(crate) derived: Derived<'a>,
}

impl<'a> EvalContext<'a> {
    /// Start a resolution over `params`.
    #[must_use]
    pub(crate) fn new(params: &'a Params, partitions: &'a PartitionResolver) -> Self {
        Self {
            params,
            partitions,
            derived: Derived::default(),
        }
    }

    pub(crate) fn bucket(&self) -> Option<&'a str> {
        self.params.bucket.as_deref()
    }

    pub(crate) fn region(&self) -> Option<&'a str> {
        self.params.region.as_deref()
    }

    pub(crate) fn partition(&self, region: Option<&str>) -> Option<&'a Partition> {
        region.map(|r| self.partitions.resolve(r))
    }

    /// A parameter an endpoint template interpolates.
    pub(crate) fn required(
        value: Option<&'a str>,
        name: &'static str,
    ) -> EndpointResult<&'a str> {
        value.ok_or(EndpointError::MissingParameter { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_first_assignment() {
        let slot: Slot<&str> = Slot::new("regionPrefix");
        assert!(!slot.is_computed());
        assert!(slot.assign(|| Some("beta")));

        let later = Cell::new(0);
        assert!(slot.assign(|| {
            later.set(later.get() + 1);
            Some("prod")
        }));
        assert_eq!(later.get(), 0);
        assert_eq!(slot.computations(), 1);
        assert_eq!(slot.value().unwrap(), &"beta");
    }

    #[test]
    fn test_should_distinguish_unset_from_absent() {
        let slot: Slot<String> = Slot::new("arnType");
        assert_eq!(
            slot.computed(),
            Err(EndpointError::UnsetDerived { field: "arnType" })
        );

        assert!(!slot.assign(|| None));
        assert_eq!(slot.computed(), Ok(None));
        assert_eq!(
            slot.value(),
            Err(EndpointError::UnsetDerived { field: "arnType" })
        );
    }

    #[test]
    fn test_should_start_with_empty_bindings() {
        let params = Params::builder().region("us-east-1").bucket("b").build();
        let ctx = EvalContext::new(&params, PartitionResolver::bundled());
        assert!(!ctx.derived.bucket_arn.is_computed());
        assert!(!ctx.derived.partition_result.is_computed());
        assert_eq!(ctx.region(), Some("us-east-1"));
        assert_eq!(ctx.partition(None), None);
        assert_eq!(
            ctx.partition(Some("cn-north-1")).map(|p| p.name.as_str()),
            Some("aws-cn")
        );
    }

    #[test]
    fn test_should_report_missing_template_parameter() {
        assert_eq!(
            EvalContext::required(None, "region"),
            Err(EndpointError::MissingParameter { name: "region" })
        );
        assert_eq!(EvalContext::required(Some("x"), "region"), Ok("x"));
    }
}
