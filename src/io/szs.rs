pub fn os_error() {
    println!("% SZS status OSError");
}

pub fn input_error() {
    println!("% SZS status InputError");
}

pub fn inappropriate() {
    println!("% SZS status Inappropriate");
}

pub fn gave_up() {
    println!("% SZS status GaveUp");
}

pub fn unsatisfiable() {
    println!("% SZS status Unsatisfiable");
}
