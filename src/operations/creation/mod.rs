mod fit_ellipse;

pub use fit_ellipse::FitEllipse;
