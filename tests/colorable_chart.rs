use chart_color::{Colorable, ColorMapper, ColorScale, Error, GroupSource,
                  Preset, RGBColor, Result, Value};
use pretty_assertions::assert_eq;
use rgb::RGB8;

#[derive(Clone, Debug, PartialEq)]
struct Slice {
    label: &'static str,
    amount: f64,
}

fn slice(label: &'static str, amount: f64) -> Slice { Slice { label, amount } }

/// A minimal pie chart: it displays a group of slices and colors them
/// through its color mapper.
struct PieChart {
    slices: Vec<Slice>,
    value: fn(&Slice) -> f64,
    colors: ColorMapper<Slice>,
}

impl PieChart {
    fn new(slices: Vec<Slice>) -> Self {
        PieChart { slices, value: |s| s.amount, colors: ColorMapper::new() }
    }

    fn render(&mut self) -> Result<Vec<String>> {
        let slices = self.slices.clone();
        slices.iter().enumerate().map(|(i, s)| self.get_color(s, i)).collect()
    }
}

impl GroupSource for PieChart {
    type Entry = Slice;
    fn group(&self) -> &[Slice] { &self.slices }
    fn value_accessor(&self) -> &dyn Fn(&Slice) -> f64 { &self.value }
}

impl Colorable for PieChart {
    type Record = Slice;
    fn color_mapper(&self) -> &ColorMapper<Slice> { &self.colors }
    fn color_mapper_mut(&mut self) -> &mut ColorMapper<Slice> {
        &mut self.colors
    }
}

fn pie() -> PieChart {
    PieChart::new(vec![slice("rent", 900.), slice("food", 300.),
                       slice("fun", 120.)])
}

/// Colors anything below `cut` in blue, the rest in red.
struct Threshold {
    cut: f64,
}

impl ColorScale for Threshold {
    fn map(&mut self, value: &Value) -> Result<String> {
        let x = value.as_number()
            .ok_or_else(|| Error::Scale { message: format!("{value}?") })?;
        Ok(if x < self.cut { "blue" } else { "red" }.to_string())
    }

    fn domain(&self) -> Vec<Value> { vec![Value::from(self.cut)] }

    fn set_domain(&mut self, domain: Vec<Value>) {
        if let Some(x) = domain.iter().find_map(Value::as_number) {
            self.cut = x;
        }
    }

    fn range(&self) -> Vec<String> { vec!["blue".into(), "red".into()] }
}

#[test]
fn default_colors_follow_category20c() {
    let mut chart = pie();
    let expected: Vec<String> = RGB8::category20c().css_colors()
        .into_iter().take(3).collect();
    assert_eq!(chart.render().unwrap(), expected);

    chart.set_colors(Preset::Ordinal);
    assert_eq!(chart.render().unwrap(), expected);
}

#[test]
fn ordinal_over_many_indices() {
    let mut chart = pie();
    let palette = RGB8::category20c().css_colors();
    let s = slice("x", 1.);
    for i in 0 .. 25 {
        assert_eq!(chart.get_color(&s, i).unwrap(), palette[i % 20]);
    }
}

#[test]
fn palette_list_by_index() {
    let mut chart = pie();
    chart.set_colors(["red", "green", "blue"]).set_elastic_color(false);
    let d = slice("any", 0.);
    assert_eq!(chart.get_color(&d, 0).unwrap(), "red");
    assert_eq!(chart.get_color(&d, 1).unwrap(), "green");
    assert_eq!(chart.get_color(&d, 2).unwrap(), "blue");
    assert_eq!(chart.colors().range(), vec!["red", "green", "blue"]);
}

#[test]
fn colors_getter_returns_what_was_set() {
    let mut chart = pie();
    chart.set_colors(vec!["#a60000".to_string(), "#ff0000".to_string()]);
    assert_eq!(chart.colors().range(), vec!["#a60000", "#ff0000"]);

    chart.set_colors(Preset::Linear);
    assert_eq!(chart.colors().range(),
               vec!["hsl(62,100%,90%)", "hsl(228,30%,20%)"]);

    chart.set_colors(chart_color::ScaleSpec::custom(Threshold { cut: 42. }));
    assert_eq!(chart.colors().domain(), vec![Value::from(42)]);
    assert_eq!(chart.colors().range(), vec!["blue", "red"]);
}

#[test]
fn elastic_color_by_amount() {
    let mut chart = pie();
    chart.set_colors(Preset::Linear)
        .set_color_accessor(|s, _| Value::from(s.amount))
        .set_elastic_color(true);
    let colors = chart.render().unwrap();
    assert_eq!(colors[0], "#242a42");
    assert_eq!(colors[2], "#fdffcc");
    assert_eq!(chart.colors().domain(), vec![Value::from(120), Value::from(900)]);

    // Same data, same colors.
    assert_eq!(chart.render().unwrap(), colors);
    let food = chart.slices[1].clone();
    let before = chart.get_color(&food, 1).unwrap();
    assert_eq!(chart.get_color(&food, 1).unwrap(), before);

    // The domain follows the displayed data.
    chart.slices.push(slice("savings", 2000.));
    assert!(chart.get_color(&food, 1).unwrap() != before);
    assert_eq!(chart.colors().domain(), vec![Value::from(120), Value::from(2000)]);
}

#[test]
fn elastic_custom_scale() {
    let mut chart = pie();
    chart.set_colors(chart_color::ScaleSpec::custom(Threshold { cut: 0. }))
        .set_color_accessor(|s, _| Value::from(s.amount))
        .set_elastic_color(true);
    // The domain becomes [120, 900]; the threshold takes the minimum.
    assert_eq!(chart.render().unwrap(), vec!["red", "red", "red"]);
    chart.slices[2].amount = 50.;
    chart.set_elastic_color(false);
    assert_eq!(chart.render().unwrap(), vec!["red", "red", "blue"]);
}

#[test]
fn custom_calculator_overrides_everything() {
    let mut chart = pie();
    chart.set_colors(Preset::Linear)
        .set_elastic_color(true)
        .set_color_accessor(|s, i| Value::from(format!("{}-{i}", s.label)))
        .set_color_calculator(|v| format!("url(#{v})"));
    assert!(chart.color_calculator().is_custom());
    assert_eq!(chart.render().unwrap(),
               vec!["url(#rent-0)", "url(#food-1)", "url(#fun-2)"]);
    // The linear scale was never consulted.
    assert_eq!(chart.colors().domain(), vec![Value::from(0), Value::from(1)]);
}

#[test]
fn setters_return_the_chart() {
    let mut chart = pie();
    let p: *const PieChart = chart.set_colors(Preset::Category10)
        .set_color_accessor(|s, _| Value::from(s.label))
        .set_elastic_color(false)
        .set_color_calculator(|v| v.to_string());
    assert!(std::ptr::eq(p, &chart));
}

#[test]
fn misconfiguration_fails_at_lookup() {
    let mut chart = pie();
    chart.set_colors(Preset::Linear)
        .set_color_accessor(|s, _| Value::from(s.label));
    assert_eq!(chart.get_color(&slice("rent", 1.), 0),
               Err(Error::NotNumeric(Value::from("rent"))));

    chart.set_colors(chart_color::ScaleSpec::custom(Threshold { cut: 1. }));
    assert!(matches!(chart.get_color(&slice("rent", 1.), 0),
                     Err(Error::Scale { .. })));
}

#[test]
fn empty_group_keeps_previous_domain() {
    let mut chart = pie();
    chart.set_colors(Preset::Linear)
        .set_color_accessor(|s, _| Value::from(s.amount))
        .set_elastic_color(true);
    chart.render().unwrap();
    chart.slices.clear();
    let c = chart.get_color(&slice("rent", 900.), 0).unwrap();
    assert_eq!(c, "#242a42");
    assert_eq!(chart.colors().domain(), vec![Value::from(120), Value::from(900)]);
}
