use crate::constants::PARAM_PANEL_ID;
use crate::core::{format_hex_color, parse_hex_color, ColorSpec, ParamSpec, ShadingParams};
use crate::core::{COLOR_SPECS, PARAM_SPECS};
use crate::dom;
use crate::error::RippleError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Build one control per shading parameter inside `#param-panel`. Edits write
/// straight into `params` and are picked up on the next frame. Returns how
/// many controls were wired; controls that cannot be created are skipped.
pub fn wire_param_panel(
    document: &web::Document,
    params: Rc<RefCell<ShadingParams>>,
) -> Result<usize, RippleError> {
    let panel = document
        .get_element_by_id(PARAM_PANEL_ID)
        .ok_or_else(|| RippleError::ResourceUnavailable(format!("#{}", PARAM_PANEL_ID)))?;

    let mut wired = 0;
    for spec in PARAM_SPECS {
        match add_slider(document, &panel, spec, params.clone()) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("[panel] skipping {}: {}", spec.id, e),
        }
    }
    for spec in COLOR_SPECS {
        match add_color_picker(document, &panel, spec, params.clone()) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("[panel] skipping {}: {}", spec.id, e),
        }
    }
    log::info!("[panel] {} controls", wired);
    Ok(wired)
}

fn control_row(
    document: &web::Document,
    panel: &web::Element,
    id: &str,
    label: &str,
    input_type: &str,
) -> Result<(web::HtmlInputElement, web::Element), RippleError> {
    let unavailable = |what: &str| RippleError::ResourceUnavailable(format!("{} for {}", what, id));
    let row: web::Element = dom::create_element(document, "div").ok_or_else(|| unavailable("row"))?;
    let text: web::Element =
        dom::create_element(document, "label").ok_or_else(|| unavailable("label"))?;
    let input: web::HtmlInputElement =
        dom::create_element(document, "input").ok_or_else(|| unavailable("input"))?;
    let readout: web::Element =
        dom::create_element(document, "span").ok_or_else(|| unavailable("readout"))?;

    let input_id = format!("param-{}", id);
    row.set_class_name("param-row");
    text.set_text_content(Some(label));
    _ = text.set_attribute("for", &input_id);
    input.set_id(&input_id);
    input.set_type(input_type);
    readout.set_class_name("param-value");

    let input_el: &web::Element = input.as_ref();
    for child in [&text, input_el, &readout] {
        row.append_child(child)
            .map_err(|e| RippleError::ResourceUnavailable(format!("{}: {:?}", id, e)))?;
    }
    panel
        .append_child(&row)
        .map_err(|e| RippleError::ResourceUnavailable(format!("{}: {:?}", id, e)))?;
    Ok((input, readout))
}

fn add_slider(
    document: &web::Document,
    panel: &web::Element,
    spec: &'static ParamSpec,
    params: Rc<RefCell<ShadingParams>>,
) -> Result<(), RippleError> {
    let (input, readout) = control_row(document, panel, spec.id, spec.label, "range")?;
    let current = params.borrow().get(spec.key);
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&current.to_string());
    readout.set_text_content(Some(&format!("{:.3}", current)));

    let input_for_read = input.clone();
    dom::listen(input.as_ref(), "input", move |_ev: web::Event| {
        let Ok(v) = input_for_read.value().parse::<f32>() else {
            return;
        };
        params.borrow_mut().set(spec.key, v);
        readout.set_text_content(Some(&format!("{:.3}", v)));
    });
    Ok(())
}

fn add_color_picker(
    document: &web::Document,
    panel: &web::Element,
    spec: &'static ColorSpec,
    params: Rc<RefCell<ShadingParams>>,
) -> Result<(), RippleError> {
    let (input, readout) = control_row(document, panel, spec.id, spec.label, "color")?;
    let hex = format_hex_color(params.borrow().color(spec.key));
    input.set_value(&hex);
    readout.set_text_content(Some(&hex));

    let input_for_read = input.clone();
    dom::listen(input.as_ref(), "input", move |_ev: web::Event| {
        let value = input_for_read.value();
        if let Some(rgb) = parse_hex_color(&value) {
            params.borrow_mut().set_color(spec.key, rgb);
            readout.set_text_content(Some(&value));
        }
    });
    Ok(())
}
