use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use chart_color::{Colorable, ColorMapper, GroupSource, Preset, Value};

type Err = Box<dyn Error>;

/// A bar chart of monthly rainfall.
struct Bars {
    months: Vec<(&'static str, f64)>,
    value: fn(&(&'static str, f64)) -> f64,
    colors: ColorMapper<(&'static str, f64)>,
}

impl GroupSource for Bars {
    type Entry = (&'static str, f64);
    fn group(&self) -> &[Self::Entry] { &self.months }
    fn value_accessor(&self) -> &dyn Fn(&Self::Entry) -> f64 { &self.value }
}

impl Colorable for Bars {
    type Record = (&'static str, f64);
    fn color_mapper(&self) -> &ColorMapper<Self::Record> { &self.colors }
    fn color_mapper_mut(&mut self) -> &mut ColorMapper<Self::Record> {
        &mut self.colors
    }
}

fn bars(fh: &mut impl Write, chart: &mut Bars, comment: &str)
        -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 2px\"><tr>")?;
    let months = chart.months.clone();
    for (i, m) in months.iter().enumerate() {
        let color = chart.get_color(m, i)?;
        writeln!(fh, "  <td style=\"width: 30px; vertical-align: bottom\">\
                      <div style=\"height: {}px; background-color: {color}\">\
                      </div>{}</td>",
                 m.1.round(), m.0)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut chart = Bars {
        months: vec![("Jan", 78.), ("Feb", 61.), ("Mar", 55.), ("Apr", 49.),
                     ("May", 62.), ("Jun", 58.), ("Jul", 52.), ("Aug", 66.),
                     ("Sep", 71.), ("Oct", 96.), ("Nov", 104.), ("Dec", 91.)],
        value: |m| m.1,
        colors: ColorMapper::new(),
    };
    let mut fh = BufWriter::new(File::create("chart_colors.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Chart_color: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Ordinal</h3>")?;
    bars(&mut fh, &mut chart, "default (category20c, by index)")?;
    for p in [Preset::Category10, Preset::Category20, Preset::Category20b] {
        chart.set_colors(p);
        bars(&mut fh, &mut chart, p.name())?;
    }
    chart.set_colors(["#a60000", "#ff0000", "#ff4040", "#ff7373",
                      "#67e667", "#39e639", "#00cc00"]);
    bars(&mut fh, &mut chart, "palette")?;

    writeln!(fh, "<h3>Linear</h3>")?;
    chart.set_colors(Preset::Linear)
        .set_color_accessor(|m, _| Value::from(m.1));
    bars(&mut fh, &mut chart, "rainfall, fixed domain [0, 1]")?;
    chart.set_elastic_color(true);
    bars(&mut fh, &mut chart, "rainfall, elastic")?;
    chart.months.retain(|m| m.1 < 70.);
    bars(&mut fh, &mut chart, "rainfall below 70mm, elastic")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
