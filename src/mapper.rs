//! Color mapping for chart components.
//!
//! A chart owns a [`ColorMapper`] and implements [`Colorable`] to
//! expose the coloring API.  The mapper only calls back into the chart
//! (through [`GroupSource`]) when elastic coloring is on, to read the
//! data currently displayed.
//!
//! # Example
//!
//! ```
//! use chart_color::{Colorable, ColorMapper, GroupSource, Value};
//!
//! struct Bars {
//!     data: Vec<(String, f64)>,
//!     value: Box<dyn Fn(&(String, f64)) -> f64>,
//!     colors: ColorMapper<(String, f64)>,
//! }
//!
//! impl GroupSource for Bars {
//!     type Entry = (String, f64);
//!     fn group(&self) -> &[Self::Entry] { &self.data }
//!     fn value_accessor(&self) -> &dyn Fn(&Self::Entry) -> f64 { &*self.value }
//! }
//!
//! impl Colorable for Bars {
//!     type Record = (String, f64);
//!     fn color_mapper(&self) -> &ColorMapper<Self::Record> { &self.colors }
//!     fn color_mapper_mut(&mut self) -> &mut ColorMapper<Self::Record> {
//!         &mut self.colors
//!     }
//! }
//!
//! let mut chart = Bars {
//!     data: vec![("a".into(), 1.), ("b".into(), 3.)],
//!     value: Box::new(|d: &(String, f64)| d.1),
//!     colors: ColorMapper::new(),
//! };
//! chart.set_colors(["#000000", "#ffffff"])
//!     .set_color_accessor(|d, _| Value::from(d.0.as_str()));
//! let d = chart.data[1].clone();
//! assert_eq!(chart.get_color(&d, 1).unwrap(), "#000000");
//! ```

use std::fmt;
use tracing::{debug, trace};

use crate::{ColorConfig, ColorScale, Preset, Result, ScaleSpec, Value};

/// The data a chart currently displays.
pub trait GroupSource {
    type Entry;

    /// The entries of the chart's current group.
    fn group(&self) -> &[Self::Entry];

    /// The numeric value the chart draws for an entry.
    fn value_accessor(&self) -> &dyn Fn(&Self::Entry) -> f64;
}

/// Return the minimum and maximum of `value` over `group`, ignoring
/// NaN.  Return `None` if no entry has a value.
pub fn group_extent<E>(group: &[E], value: &dyn Fn(&E) -> f64)
                       -> Option<(f64, f64)> {
    group.iter().map(value).filter(|x| !x.is_nan())
        .fold(None, |ext, x| match ext {
            None => Some((x, x)),
            Some((min, max)) => Some((f64::min(min, x), f64::max(max, x))),
        })
}

/// Turns a domain value into a color.
pub enum Calculator {
    /// Re-fit the scale domain to the chart's group when elastic
    /// coloring is on, then map the value through the scale.
    Scale,
    /// Any function; the scale and the elastic flag are ignored.
    Custom(Box<dyn Fn(&Value) -> String>),
}

impl Calculator {
    pub fn is_custom(&self) -> bool { matches!(self, Calculator::Custom(_)) }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculator::Scale => f.write_str("Scale"),
            Calculator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

type Accessor<R> = Box<dyn Fn(&R, usize) -> Value>;

/// Coloring state of a chart whose records have type `R`.
///
/// Defaults: the [`Preset::Ordinal`] scale, the record index as
/// domain value, elastic coloring off, the [`Calculator::Scale`]
/// calculator.
pub struct ColorMapper<R> {
    scale: Box<dyn ColorScale>,
    accessor: Accessor<R>,
    elastic: bool,
    calculator: Calculator,
}

impl<R: 'static> Default for ColorMapper<R> {
    fn default() -> Self { Self::new() }
}

impl<R> fmt::Debug for ColorMapper<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorMapper")
            .field("domain", &self.scale.domain())
            .field("range", &self.scale.range())
            .field("elastic", &self.elastic)
            .field("calculator", &self.calculator)
            .finish()
    }
}

impl<R: 'static> ColorMapper<R> {
    pub fn new() -> Self {
        ColorMapper { scale: Preset::Ordinal.scale(),
                      accessor: Box::new(|_: &R, i: usize| Value::from(i)),
                      elastic: false,
                      calculator: Calculator::Scale }
    }

    /// Return a mapper set up according to `config`.
    pub fn from_config(config: &ColorConfig) -> Self {
        let mut m = Self::new();
        m.apply_config(config);
        m
    }

    /// Replace the scale and the elastic flag with those of `config`.
    /// The accessor and the calculator are kept.
    pub fn apply_config(&mut self, config: &ColorConfig) -> &mut Self {
        debug!(elastic = config.elastic_color, "Applying color config");
        self.set_colors(config.colors.clone())
            .set_elastic_color(config.elastic_color)
    }

    /// The current scale.
    pub fn colors(&self) -> &dyn ColorScale { &*self.scale }

    pub fn colors_mut(&mut self) -> &mut dyn ColorScale { &mut *self.scale }

    /// Replace the scale.  Nothing is checked here: a scale unable to
    /// map the values it is given fails in [`ColorMapper::get_color`].
    pub fn set_colors(&mut self, spec: impl Into<ScaleSpec>) -> &mut Self {
        let spec = spec.into();
        debug!(scale = ?spec, "Setting color scale");
        self.scale = spec.resolve();
        self
    }

    /// The function extracting a domain value from a record and its
    /// index.
    pub fn color_accessor(&self) -> &dyn Fn(&R, usize) -> Value {
        &*self.accessor
    }

    pub fn set_color_accessor(
        &mut self, f: impl Fn(&R, usize) -> Value + 'static) -> &mut Self {
        self.accessor = Box::new(f);
        self
    }

    /// Whether the scale domain is re-fitted to the chart's group
    /// before each lookup.
    pub fn elastic_color(&self) -> bool { self.elastic }

    pub fn set_elastic_color(&mut self, elastic: bool) -> &mut Self {
        self.elastic = elastic;
        self
    }

    pub fn color_calculator(&self) -> &Calculator { &self.calculator }

    /// Use `f` to turn domain values into colors, bypassing the scale
    /// and elastic coloring.
    pub fn set_color_calculator(
        &mut self, f: impl Fn(&Value) -> String + 'static) -> &mut Self {
        self.calculator = Calculator::Custom(Box::new(f));
        self
    }

    /// Whether the next lookup reads the chart's group.
    pub fn reads_group(&self) -> bool {
        self.elastic && !self.calculator.is_custom()
    }

    /// Return the color of `record` at position `index`, reading the
    /// group of `host` if elastic coloring is on.
    pub fn get_color<G>(&mut self, host: &G, record: &R, index: usize)
                        -> Result<String>
    where G: GroupSource + ?Sized {
        let value = (self.accessor)(record, index);
        let extent = if self.reads_group() {
            group_extent(host.group(), host.value_accessor())
        } else { None };
        self.calculate(&value, extent)
    }

    /// Run the calculator on `value`.  `extent` is the `(min, max)` of
    /// the chart's group, only used by elastic coloring.
    pub(crate) fn calculate(&mut self, value: &Value,
                            extent: Option<(f64, f64)>) -> Result<String> {
        match &self.calculator {
            Calculator::Custom(f) => Ok(f(value)),
            Calculator::Scale => {
                if self.elastic {
                    match extent {
                        Some((min, max)) => {
                            trace!(min, max, "Recomputed elastic color domain");
                            self.scale.set_domain(vec![min.into(), max.into()]);
                        }
                        None => debug!("Empty group, keeping color domain"),
                    }
                }
                self.scale.map(value)
            }
        }
    }
}


/// Coloring API of a chart, provided by its embedded [`ColorMapper`].
///
/// Setters return the chart itself so calls can be chained.
pub trait Colorable: GroupSource {
    type Record: 'static;

    fn color_mapper(&self) -> &ColorMapper<Self::Record>;

    fn color_mapper_mut(&mut self) -> &mut ColorMapper<Self::Record>;

    fn colors(&self) -> &dyn ColorScale { self.color_mapper().colors() }

    /// See [`ColorMapper::set_colors`].
    fn set_colors(&mut self, spec: impl Into<ScaleSpec>) -> &mut Self {
        self.color_mapper_mut().set_colors(spec);
        self
    }

    fn color_accessor(&self) -> &dyn Fn(&Self::Record, usize) -> Value {
        self.color_mapper().color_accessor()
    }

    fn set_color_accessor(
        &mut self,
        f: impl Fn(&Self::Record, usize) -> Value + 'static) -> &mut Self {
        self.color_mapper_mut().set_color_accessor(f);
        self
    }

    fn elastic_color(&self) -> bool { self.color_mapper().elastic_color() }

    fn set_elastic_color(&mut self, elastic: bool) -> &mut Self {
        self.color_mapper_mut().set_elastic_color(elastic);
        self
    }

    fn color_calculator(&self) -> &Calculator {
        self.color_mapper().color_calculator()
    }

    fn set_color_calculator(
        &mut self, f: impl Fn(&Value) -> String + 'static) -> &mut Self {
        self.color_mapper_mut().set_color_calculator(f);
        self
    }

    /// Return the color to draw `record`, the `index`-th rendered
    /// data point, with.
    fn get_color(&mut self, record: &Self::Record, index: usize)
                 -> Result<String> {
        let mapper = self.color_mapper();
        let value = mapper.color_accessor()(record, index);
        let extent = if mapper.reads_group() {
            group_extent(self.group(), self.value_accessor())
        } else { None };
        self.color_mapper_mut().calculate(&value, extent)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Group(Vec<f64>, fn(&f64) -> f64);

    impl GroupSource for Group {
        type Entry = f64;
        fn group(&self) -> &[f64] { &self.0 }
        fn value_accessor(&self) -> &dyn Fn(&f64) -> f64 { &self.1 }
    }

    fn group(data: Vec<f64>) -> Group { Group(data, |x| *x) }

    #[test]
    fn extent_ignores_nan() {
        let id = |x: &f64| *x;
        assert_eq!(group_extent(&[3., f64::NAN, -1., 2.], &id), Some((-1., 3.)));
        assert_eq!(group_extent(&[5.], &id), Some((5., 5.)));
        assert_eq!(group_extent::<f64>(&[], &id), None);
        assert_eq!(group_extent(&[f64::NAN], &id), None);
    }

    #[test]
    fn defaults() {
        let mut m = ColorMapper::<()>::new();
        assert!(!m.elastic_color());
        assert!(!m.color_calculator().is_custom());
        assert_eq!(m.color_accessor()(&(), 4), Value::from(4));
        let g = group(vec![]);
        assert_eq!(m.get_color(&g, &(), 0).unwrap(), "#3182bd");
        assert_eq!(m.get_color(&g, &(), 1).unwrap(), "#6baed6");
    }

    #[test]
    fn setters_keep_other_fields() {
        let mut m = ColorMapper::<f64>::new();
        m.set_color_accessor(|x, _| Value::from(*x)).set_elastic_color(true);
        m.set_colors(Preset::Linear);
        assert!(m.elastic_color());
        assert_eq!(m.color_accessor()(&2.5, 0), Value::from(2.5));
        m.set_elastic_color(false);
        assert_eq!(m.colors().range()[0], "hsl(62,100%,90%)");
    }

    #[test]
    fn elastic_refits_domain_each_call() {
        let mut m = ColorMapper::<f64>::new();
        m.set_colors(Preset::Linear)
            .set_color_accessor(|x, _| Value::from(*x))
            .set_elastic_color(true);
        let mut g = group(vec![10., 30., 20.]);
        let low = m.get_color(&g, &10., 0).unwrap();
        assert_eq!(m.colors().domain(), vec![Value::from(10), Value::from(30)]);
        assert_eq!(low, "#fdffcc");
        assert_eq!(m.get_color(&g, &10., 0).unwrap(), low);
        g.0.push(0.);
        assert_ne!(m.get_color(&g, &10., 0).unwrap(), low);
        assert_eq!(m.colors().domain(), vec![Value::from(0), Value::from(30)]);
    }

    #[test]
    fn empty_group_keeps_domain() {
        let mut m = ColorMapper::<f64>::new();
        m.set_colors(Preset::Linear)
            .set_color_accessor(|x, _| Value::from(*x))
            .set_elastic_color(true);
        m.get_color(&group(vec![1., 2.]), &1., 0).unwrap();
        m.get_color(&group(vec![]), &1., 0).unwrap();
        assert_eq!(m.colors().domain(), vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn custom_calculator_bypasses_scale() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut m = ColorMapper::<()>::new();
        m.set_elastic_color(true)
            .set_colors(Vec::<String>::new())
            .set_color_calculator(move |v| {
                seen.set(seen.get() + 1);
                format!("c{v}")
            });
        assert!(!m.reads_group());
        assert_eq!(m.get_color(&group(vec![]), &(), 3).unwrap(), "c3");
        assert_eq!(calls.get(), 1);
        assert!(m.colors().domain().is_empty());
    }

    #[test]
    fn scale_errors_surface_at_lookup() {
        let mut m = ColorMapper::<()>::new();
        m.set_colors(Preset::Linear)
            .set_color_accessor(|_, _| Value::from("n/a"));
        assert_eq!(m.get_color(&group(vec![]), &(), 0),
                   Err(crate::Error::NotNumeric(Value::from("n/a"))));
    }
}
