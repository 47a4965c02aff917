use crate::suite::Group;

pub(crate) fn run() {
    for group in Group::ALL {
        println!("{group:?}\t{group}()");
    }
}
