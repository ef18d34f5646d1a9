/*!
 * If this is your first time using ndarr you should check out the
 * [Array](./arrays/struct.Array.html) type for construction and element
 * access, then the [operations](./arrays/operations/index.html) module for
 * the algorithms that work on arrays.
 *
 * Arrays have a dimensionality chosen at runtime. Slicing an array yields a
 * view that shares storage with its parent, so writes through a view are
 * visible to every other array sharing that storage. All iteration-based
 * operations (copying, transforming, reducing, filtering, transposing) are
 * driven by a [Subscripts](./arrays/indexing/struct.Subscripts.html) cursor
 * over the legal index space of an array's header.
 */

pub mod arrays;
pub mod numeric;
