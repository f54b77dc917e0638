//! Known categories and how to fetch and enrich them.
//!
//! Responsibilities:
//! - Map each category name to its API relation and collection element key.
//! - Declare the fetch strategy and enrichment rule of every category.
//! - Hold the custom category list and the denylist.
//!
//! Invariants:
//! - Names and relations are unique within [`MANIFEST`].
//! - Every custom category has a manifest entry.
//! - Bump [`MANIFEST_VERSION`] whenever an entry is added, removed or changed.

/// Version of the category table below.
pub const MANIFEST_VERSION: u32 = 1;

/// How the rows of a category are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// `GET /api/{rel}` and one row per returned object.
    List,
    /// One row per (VM, NIC) pair.
    VmNics,
}

/// Derived fields added to each object of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentRule {
    None,
    /// Flattened `statistics` sub-collection of a host.
    HostStatistics,
    /// Disk sizes, snapshot count, tags and guest addresses of a VM.
    VmStatistics,
}

/// A queryable category of engine objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Identifier used for output, e.g. `vms_service`.
    pub name: &'static str,
    /// Relation of the collection in the API root, e.g. `vms`.
    pub rel: &'static str,
    /// Array key of the collection response, e.g. `vm`.
    pub element_key: &'static str,
    pub strategy: FetchStrategy,
    pub enrichment: EnrichmentRule,
}

const fn list(name: &'static str, rel: &'static str, element_key: &'static str) -> Category {
    Category {
        name,
        rel,
        element_key,
        strategy: FetchStrategy::List,
        enrichment: EnrichmentRule::None,
    }
}

pub const MANIFEST: &[Category] = &[
    list("affinity_labels_service", "affinitylabels", "affinity_label"),
    list("bookmarks_service", "bookmarks", "bookmark"),
    list("cluster_levels_service", "clusterlevels", "cluster_level"),
    list("clusters_service", "clusters", "cluster"),
    list("cpu_profiles_service", "cpuprofiles", "cpu_profile"),
    list("data_centers_service", "datacenters", "data_center"),
    list("disk_profiles_service", "diskprofiles", "disk_profile"),
    list("disks_service", "disks", "disk"),
    list("domains_service", "domains", "domain"),
    list("events_service", "events", "event"),
    list(
        "external_host_providers_service",
        "externalhostproviders",
        "external_host_provider",
    ),
    list(
        "external_template_imports_service",
        "externaltemplateimports",
        "external_template_import",
    ),
    list(
        "external_vm_imports_service",
        "externalvmimports",
        "external_vm_import",
    ),
    list("groups_service", "groups", "group"),
    Category {
        name: "hosts_service",
        rel: "hosts",
        element_key: "host",
        strategy: FetchStrategy::List,
        enrichment: EnrichmentRule::HostStatistics,
    },
    list("icons_service", "icons", "icon"),
    list("image_transfers_service", "imagetransfers", "image_transfer"),
    list("instance_types_service", "instancetypes", "instance_type"),
    list("jobs_service", "jobs", "job"),
    list("katello_errata_service", "katelloerrata", "katello_erratum"),
    list("mac_pools_service", "macpools", "mac_pool"),
    list("network_filters_service", "networkfilters", "network_filter"),
    list("networks_service", "networks", "network"),
    list(
        "openstack_image_providers_service",
        "openstackimageproviders",
        "openstack_image_provider",
    ),
    list(
        "openstack_network_providers_service",
        "openstacknetworkproviders",
        "openstack_network_provider",
    ),
    list(
        "openstack_volume_providers_service",
        "openstackvolumeproviders",
        "openstack_volume_provider",
    ),
    list("operating_systems_service", "operatingsystems", "operating_system"),
    list("options_service", "options", "system_option"),
    list("permissions_service", "permissions", "permission"),
    list("roles_service", "roles", "role"),
    list(
        "scheduling_policies_service",
        "schedulingpolicies",
        "scheduling_policy",
    ),
    list(
        "scheduling_policy_units_service",
        "schedulingpolicyunits",
        "scheduling_policy_unit",
    ),
    list(
        "storage_connections_service",
        "storageconnections",
        "storage_connection",
    ),
    list("storage_domains_service", "storagedomains", "storage_domain"),
    list("tags_service", "tags", "tag"),
    list("templates_service", "templates", "template"),
    list("users_service", "users", "user"),
    list("vm_pools_service", "vmpools", "vm_pool"),
    Category {
        name: "vms_service",
        rel: "vms",
        element_key: "vm",
        strategy: FetchStrategy::List,
        enrichment: EnrichmentRule::VmStatistics,
    },
    list("vnic_profiles_service", "vnicprofiles", "vnic_profile"),
    Category {
        name: "nics_service",
        rel: "vms",
        element_key: "nic",
        strategy: FetchStrategy::VmNics,
        enrichment: EnrichmentRule::None,
    },
];

/// Categories that are not discovered from the API root.
pub const CUSTOM_CATEGORIES: &[&str] = &["nics_service"];

/// Categories that are never collected.
pub const DENYLIST: &[&str] = &[
    "affinity_labels_service",
    "bookmarks_service",
    "cluster_levels_service",
    "clusters_service",
    "connection",
    "cpu_profiles_service",
    "data_centers_service",
    "disk_profiles_service",
    "domains_service",
    "events_service",
    "external_host_providers_service",
    "external_template_imports_service",
    "external_vm_imports_service",
    "groups_service",
    "icons_service",
    "instance_types_service",
    "image_transfers_service",
    "jobs_service",
    "katello_errata_service",
    "mac_pools_service",
    "network_filters_service",
    "networks_service",
    "openstack_image_providers_service",
    "openstack_network_providers_service",
    "openstack_volume_providers_service",
    "operating_systems_service",
    "options_service",
    "path",
    "permissions_service",
    "roles_service",
    "scheduling_policies_service",
    "scheduling_policy_units_service",
    "storage_connections_service",
    "tags_service",
    "templates_service",
    "users_service",
    "vm_pools_service",
    "vnic_profiles_service",
];

/// Standard (discoverable) category for an API root relation.
///
/// Custom categories share relations with standard ones and are never
/// returned here.
pub fn by_rel(rel: &str) -> Option<&'static Category> {
    MANIFEST
        .iter()
        .find(|c| c.rel == rel && c.strategy == FetchStrategy::List)
}

/// Category by name.
pub fn by_name(name: &str) -> Option<&'static Category> {
    MANIFEST.iter().find(|c| c.name == name)
}
