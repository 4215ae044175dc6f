/// Exposes the single field a partitioner may use to place an entry.
///
/// Affinity functions must derive the owning partition or node from
/// [`affinity_key`](AffinityKeyMapped::affinity_key) alone, never from the
/// key's hash or identity, so that everything sharing the value is co-located.
pub trait AffinityKeyMapped {
  fn affinity_key(&self) -> &str;
}

/// Capability shared by every key that names a cache-backed data structure.
pub trait CacheInternalKey: AffinityKeyMapped {
  /// Logical name of the data-structure instance.
  fn name(&self) -> &str;

  /// Name comparison across key kinds. `PartialEq` on a concrete key only
  /// matches keys of the same kind; this is the explicit opt-in for anything
  /// else.
  fn same_name(&self, other: &dyn CacheInternalKey) -> bool {
    self.name() == other.name()
  }
}
